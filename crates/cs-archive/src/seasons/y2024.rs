//! The 2024 season table (17 records, Aghon through Querubin).

use cs_core::{Crossing, Month, ParStatus};

use super::RawRecord;

pub(crate) static RECORDS: &[RawRecord] = &[
    RawRecord {
        name: "Aghon",
        arrival: "2000_05/23",
        departure: "1200_05/29",
        month: Month::May,
        interval: "6",
        crossing: Crossing::Land,
        landfall: "5/24/2024 23:20:00",
        developed: ParStatus::Within,
        path: "East to Northeast",
        category: "Tropical Depression",
        wind_speed_kph: 140,
        casualties: 6,
        damage_php: 1_030_000_000.0,
        places: "Region III | Aurora | Zambales | Pampanga | Bulacan | Nueva Ecija | Tarlac | Region V | Camarines Sur | Camarines Norte | Albay | Sorsogon | Masbate | Catanduanes | Region VI | Iloilo | Guimaras | Capiz | Aklan | Antique | Negros Occidental | Region VII | Cebu | Bohol | Negros Oriental | Siquijor | Region VIII | Northern Samar | Eastern Samar | Samar | Leyte | Southern Leyte | Biliran",
    },
    RawRecord {
        name: "Butchoy",
        arrival: "0800_07/19",
        departure: "0700_07/20",
        month: Month::July,
        interval: "1",
        crossing: Crossing::Land,
        landfall: "2024-07-18 10:00",
        developed: ParStatus::Within,
        path: "Southwestward",
        category: "Tropical Depression",
        wind_speed_kph: 55,
        casualties: 0,
        damage_php: 0.0,
        places: "Region III | Aurora | Zambales | Pampanga | Bulacan | Nueva Ecija | Tarlac | Region IV-A | Quezon | Rizal | Cavite | Laguna | Batangas | Region IV-B | Palawan | Occidental Mindoro | Oriental Mindoro | Romblon | Marinduque | Region V | Camarines Sur | Camarines Norte | Albay | Sorsogon | Masbate | Catanduanes | Region VI | Iloilo | Guimaras | Capiz | Aklan | Antique | Negros Occidental",
    },
    RawRecord {
        name: "Carina",
        arrival: "2000_07/19",
        departure: "0800_07/24",
        month: Month::July,
        interval: "5",
        crossing: Crossing::Water,
        landfall: "2024-07-19 4:00",
        developed: ParStatus::Within,
        path: "Northwestard",
        category: "Super Typhoon",
        wind_speed_kph: 185,
        casualties: 48,
        damage_php: 10_400_000_000.0,
        places: "Region II | Isabela | Cagayan | Quirino | Nueva Vizcaya | Region III | Aurora | Zambales | Pampanga | Bulacan | Nueva Ecija | Tarlac | Region IV-A | Quezon | Rizal | Cavite | Laguna | Batangas | Region IV-B | Palawan | Occidental Mindoro | Oriental Mindoro | Romblon | Marinduque | Region V | Camarines Sur | Camarines Norte | Albay | Sorsogon | Masbate | Catanduanes | Region VI | Iloilo | Guimaras | Capiz | Aklan | Antique | Negros Occidental | Region VII | Cebu | Bohol | Negros Oriental | Siquijor | Region VIII | Northern Samar | Eastern Samar | Samar | Leyte | Southern Leyte | Biliran",
    },
    RawRecord {
        name: "Dindo",
        arrival: "0800_08/18",
        departure: "0700_08/19",
        month: Month::August,
        interval: "1",
        crossing: Crossing::Water,
        landfall: "2024-08-18 2:00",
        developed: ParStatus::Within,
        path: "Westward",
        category: "Tropical Storm",
        wind_speed_kph: 65,
        casualties: 0,
        damage_php: 0.0,
        places: "Region V | Camarines Sur | Camarines Norte | Albay | Sorsogon | Masbate | Catanduanes | Region VI | Iloilo | Guimaras | Capiz | Aklan | Antique | Negros Occidental | Region VII | Cebu | Bohol | Negros Oriental | Siquijor",
    },
    RawRecord {
        name: "Enteng",
        arrival: "2300_09/01",
        departure: "2000_09/04",
        month: Month::September,
        interval: "3",
        crossing: Crossing::Land,
        landfall: "2024-09-02 14:00",
        developed: ParStatus::Outside,
        path: "Northwestward",
        category: "Tropical Storm",
        wind_speed_kph: 88,
        casualties: 21,
        damage_php: 2_600_000_000.0,
        places: "Region III | Aurora | Zambales | Pampanga | Bulacan | Nueva Ecija | Tarlac | Region IV-A | Quezon | Rizal | Cavite | Laguna | Batangas | Region IV-B | Palawan | Occidental Mindoro | Oriental Mindoro | Romblon | Marinduque | Region V | Camarines Sur | Camarines Norte | Albay | Sorsogon | Masbate | Catanduanes | Region VI | Iloilo | Guimaras | Capiz | Aklan | Antique | Negros Occidental | Region VII | Cebu | Bohol | Negros Oriental | Siquijor | Region VIII | Northern Samar | Eastern Samar | Samar | Leyte | Southern Leyte | Biliran",
    },
    RawRecord {
        name: "Ferdie",
        arrival: "1600_09/13",
        departure: "0200_09/14",
        month: Month::September,
        interval: "1",
        crossing: Crossing::Water,
        landfall: "2024-09-13 10:00",
        developed: ParStatus::Outside,
        path: "Northwestward-Northward",
        category: "Tropical Storm",
        wind_speed_kph: 85,
        casualties: 20,
        damage_php: 1_900_000_000.0,
        places: "Region IV-B | Occidental Mindoro | Oriental Mindoro | Palawan | Romblon | Region V | Camarines Sur | Albay | Sorsogon | Masbate | Region VI | Negros Occidental | Antique | Capiz | Aklan | Iloilo | Guimaras | Region VII | Cebu | Bohol | Negros Oriental | Region IX | Zamboanga del Sur | Zamboanga del Norte | Zamboanga Sibugay | BARMM | Lanao del Sur | Maguindanao del Norte | Maguindanao del Sur | Region X | Misamis Oriental | Misamis Occidental | Lanao del Norte | Region XI | Davao del Sur | Davao del Norte",
    },
    RawRecord {
        name: "Gener",
        arrival: "0800_09/16",
        departure: "0200_09/18",
        month: Month::September,
        interval: "2",
        crossing: Crossing::Land,
        landfall: "2024-09-17 0:00",
        developed: ParStatus::Within,
        path: "West-Northwestward",
        category: "Tropical Depresion",
        wind_speed_kph: 55,
        casualties: 20,
        damage_php: 1_121_000_000.0,
        places: "Region I | Ilocos Sur | Ilocos Norte | La Union | Pangasinan | Region II | Isabela | Cagayan | Quirino | Nueva Vizcaya | Region III | Zambales | Bataan | Tarlac | Nueva Ecija | Pampanga | Bulacan | Aurora | CAR | Ifugao | Mountain Province | Kalinga | Apayao | Benguet",
    },
    RawRecord {
        name: "Helen",
        arrival: "1830_09/17",
        departure: "1700_09/18",
        month: Month::September,
        interval: "1",
        crossing: Crossing::Water,
        landfall: "2024-09-17 18:30",
        developed: ParStatus::Outside,
        path: "West-Northwestward",
        category: "Tropical Storm",
        wind_speed_kph: 85,
        casualties: 20,
        damage_php: 1_121_000_000.0,
        places: "Region IV-A | Rizal | Quezon | Laguna | Cavite | Batangas | Region IV-B | Occidental Mindoro | Oriental Mindoro | Palawan | Romblon | Region V | Camarines Sur | Albay | Sorsogon | Masbate | Catanduanes | Region VI | Negros Occidental | Antique | Iloilo | Aklan | Capiz | Guimaras | Region VII | Cebu | Bohol | Negros Oriental | Siquijor | Region IX | Zamboanga del Sur | Zamboanga del Norte | Zamboanga Sibugay | BARMM | Lanao del Sur | Maguindanao del Norte | Maguindanao del Sur",
    },
    RawRecord {
        name: "Igme",
        arrival: "0000_09/20",
        departure: "0400_09/21",
        month: Month::September,
        interval: "1",
        crossing: Crossing::Water,
        landfall: "2024-09-20 5:00",
        developed: ParStatus::Outside,
        path: "West-Southwestward",
        category: "Tropical Depression",
        wind_speed_kph: 55,
        casualties: 48,
        damage_php: 4_100_000_000.0,
        places: "Region IV-A | Rizal | Quezon | Laguna | Cavite | Batangas | Region IV-B | Occidental Mindoro | Oriental Mindoro | Palawan | Romblon | Region V | Camarines Sur | Albay | Sorsogon | Masbate | Catanduanes | Region VI | Negros Occidental | Antique | Iloilo | Aklan | Capiz | Guimaras | Region VII | Cebu | Bohol | Negros Oriental | Siquijor | Region IX | Zamboanga del Sur | Zamboanga del Norte | Zamboanga Sibugay | BARMM | Lanao del Sur | Maguindanao del Norte | Maguindanao del Sur",
    },
    RawRecord {
        name: "Julian",
        arrival: "0800_10/01",
        departure: "0500_10/04",
        month: Month::October,
        interval: "3",
        crossing: Crossing::Water,
        landfall: "2024-10-24 12:30",
        developed: ParStatus::Outside,
        path: "West-Northwestward",
        category: "Super Typhoon",
        wind_speed_kph: 195,
        casualties: 5,
        damage_php: 1_570_000_000.0,
        places: "Region I | Ilocos Sur | Ilocos Norte | La Union | Pangasinan | Region II | Isabela | Cagayan | Quirino | Nueva Vizcaya | Region III | Zambales | Bataan | Tarlac | Nueva Ecija | Pampanga | Bulacan | Aurora | CAR | Ifugao | Mountain Province | Kalinga | Apayao | Benguet",
    },
    RawRecord {
        name: "Kristine",
        arrival: "0000_10/21",
        departure: "0300_10/25",
        month: Month::October,
        interval: "4",
        crossing: Crossing::Land,
        landfall: "2024-10-26 19:30",
        developed: ParStatus::Within,
        path: "West-Northwestward",
        category: "Severe Typhoon Storm",
        wind_speed_kph: 110,
        casualties: 137,
        damage_php: 7_900_000.0,
        places: "Region V | Camarines Sur | Camarines Norte | Albay | Sorsogon | Masbate | Catanduanes | Region II | Cagayan | Isabela | Apayao | Kalinga | Region I | Ilocos Norte | Ilocos Sur | La Union | Pangasinan | CAR | Benguet | Ifugao | Mountain Province | Abra | Region III | Aurora | Zambales | Pampanga | Bulacan | Nueva Ecija | Tarlac | Region IV-A | Quezon | Rizal | Cavite | Laguna | Batangas | Region IV-B | Palawan | Occidental Mindoro | Oriental Mindoro | Romblon | Marinduque",
    },
    RawRecord {
        name: "Leon",
        arrival: "1200_10/26",
        departure: "0300_10/31",
        month: Month::October,
        interval: "5",
        crossing: Crossing::Water,
        landfall: "2024-11-06 22:00",
        developed: ParStatus::Outside,
        path: "West-Northwestward",
        category: "Super Typhoon",
        wind_speed_kph: 185,
        casualties: 159,
        damage_php: 996_000_000.0,
        places: "Region I | Ilocos Sur | Ilocos Norte | La Union | Pangasinan | Region II | Isabela | Cagayan | Quirino | Nueva Vizcaya | Region III | Zambales | Bataan | Tarlac | Nueva Ecija | Pampanga | Bulacan | Aurora | CAR | Ifugao | Mountain Province | Kalinga | Apayao | Benguet | Region IV-A | Quezon | Rizal | Cavite | Laguna | Batangas | Region IV-B | Palawan | Occidental Mindoro | Oriental Mindoro | Romblon | Marinduque | Region IX | Zamboanga del Sur | Zamboanga del Norte | Zamboanga Sibugay | BARMM | Lanao",
    },
    RawRecord {
        name: "Marce",
        arrival: "1800_11/04",
        departure: "1600_11/08",
        month: Month::November,
        interval: "4",
        crossing: Crossing::Land,
        landfall: "2024-11-09 20:00",
        developed: ParStatus::Within,
        path: "West - Northwestward",
        category: "Typhoon",
        wind_speed_kph: 120,
        casualties: 20,
        damage_php: 1_900_000_000.0,
        places: "Region II | Cagayan | Isabela | Quirino | Nueva Vizcaya | Region III | Aurora | Zambales | Pampanga | Bulacan | Nueva Ecija | Tarlac | Region IV-A | Quezon | Rizal | Cavite | Laguna | Batangas | Region IV-B | Palawan | Occidental Mindoro | Oriental Mindoro | Romblon | Marinduque | Region V | Camarines Sur | Camarines Norte | Albay | Sorsogon | Masbate | Catanduanes | Region VI | Iloilo | Guimaras | Capiz | Aklan | Antique | Negros Occidental | Region VII | Cebu | Bohol | Negros Oriental | Siquijor | Region VIII | Northern Samar | Eastern Samar | Samar | Leyte | Southern Leyte | Biliran",
    },
    RawRecord {
        name: "Nika",
        arrival: "1800_11/08",
        departure: "1400_11/12",
        month: Month::November,
        interval: "4",
        crossing: Crossing::Land,
        landfall: "2024-11-12 14:00",
        developed: ParStatus::Within,
        path: "West - Northwestward",
        category: "Typhoon",
        wind_speed_kph: 130,
        casualties: 20,
        damage_php: 1_121_000_000.0,
        places: "Region II | Cagayan | Isabela | Apayao | Kalinga | Region I | Ilocos Norte | Ilocos Sur | La Union | Pangasinan | CAR | Benguet | Ifugao | Mountain Province | Region III | Aurora | Nueva Vizcaya | Quirino",
    },
    RawRecord {
        name: "Ofel",
        arrival: "1800_11/11",
        departure: "1200_11/15",
        month: Month::November,
        interval: "4",
        crossing: Crossing::Land,
        landfall: "2024-11-17 16:00",
        developed: ParStatus::Within,
        path: "Westward - Northwestward",
        category: "Super Typhoon",
        wind_speed_kph: 185,
        casualties: 48,
        damage_php: 10_400_000_000.0,
        places: "Region II | Cagayan | Isabela | Apayao | Kalinga | Region I | Ilocos Norte | Ilocos Sur | La Union | Pangasinan | CAR | Benguet | Ifugao | Mountain Province | Abra | Region III | Aurora | Nueva Vizcaya | Quirino",
    },
    RawRecord {
        name: "Pepito Manaloto",
        arrival: "1200_11/16",
        departure: "0800_11/18",
        month: Month::November,
        interval: "2",
        crossing: Crossing::Land,
        landfall: "None",
        developed: ParStatus::Within,
        path: "West - Northwestward",
        category: "Typhoon",
        wind_speed_kph: 150,
        casualties: 20,
        damage_php: 1_900_000_000.0,
        places: "Region V | Catanduanes | Camarines Sur | Region III | Aurora | Isabela | Nueva Ecija | CAR | Benguet | Ifugao | Mountain Province",
    },
    RawRecord {
        name: "Querubin",
        arrival: "0000_12/24",
        departure: "0000_12/25",
        month: Month::December,
        interval: "1",
        crossing: Crossing::Water,
        landfall: "None",
        developed: ParStatus::Outside,
        path: "East - Northwestward",
        category: "Tropical Depression",
        wind_speed_kph: 55,
        casualties: 0,
        damage_php: 0.0,
        places: "Region V | Albay | Sorsogon | Camarines Sur | Region VIII | Leyte | Southern Leyte",
    },
];
