//! The 2025 season table (23 records, Auring through Wilma).

use cs_core::{Crossing, Month, ParStatus};

use super::RawRecord;

pub(crate) static RECORDS: &[RawRecord] = &[
    RawRecord {
        name: "Auring",
        arrival: "1520_07/12",
        departure: "0000_07/13",
        month: Month::July,
        interval: "1",
        crossing: Crossing::Water,
        landfall: "None",
        developed: ParStatus::Within,
        path: "North-Northwest",
        category: "Tropical Depression",
        wind_speed_kph: 140,
        casualties: 3,
        damage_php: 50_000.0,
        places: "Region II | Cagayan Valley | Batanes | Babuyan Islands | CAR | Cordillera Administrative Region | Region I | Ilocos Region",
    },
    RawRecord {
        name: "Bising",
        arrival: "1100_07/04",
        departure: "0500_07/07",
        month: Month::July,
        interval: "3",
        crossing: Crossing::Water,
        landfall: "None",
        developed: ParStatus::Within,
        path: "North-Northeastward",
        category: "Typhoon",
        wind_speed_kph: 140,
        casualties: 3,
        damage_php: 12_400_000.0,
        places: "Region I | Ilocos Region | Ilocos Norte | Ilocos Sur | La Union | Pangasinan | CAR | Cordillera Administrative Region | Apayao | Kalinga | Mountain Province | Ifugao | Benguet | Region II | Cagayan Valley | Cagayan | Isabela | Nueva Vizcaya | Quirino | Region III | Central Luzon | Bataan | Zambales | Aurora | Northern Nueva Ecija",
    },
    RawRecord {
        name: "Crisig",
        arrival: "0800_07/16",
        departure: "1100_07/19",
        month: Month::July,
        interval: "3",
        crossing: Crossing::Land,
        landfall: "2025-07-18 8:00",
        developed: ParStatus::Within,
        path: "West-Northwestward",
        category: "Tropical Storm",
        wind_speed_kph: 110,
        casualties: 40,
        damage_php: 19_660_000_000.0,
        places: "Region II | Cagayan Valley | Cagayan | Isabela | Nueva Vizcaya | Quirino | Region I | Ilocos Region | Ilocos Norte | Ilocos Sur | La Union | Pangasinan | CAR | Cordillera Administrative Region | Apayao | Kalinga | Mountain Province | Ifugao | Benguet | Region III | Central Luzon | Aurora | Northern Nueva Ecija | Region V | Bicol Region | Camarines Norte | Region IV-A | CALABARZON | Northern Quezon | Polillo Islands | MIMAROPA | Mindoro | Marinduque | Romblon | Palawan | Occidental Mindoro | Oriental Mindoro | NCR | Metro Manila | Region VI | Western Visayas | Antique | Aklan | Iloilo",
    },
    RawRecord {
        name: "Dante",
        arrival: "0500_07/22",
        departure: "0300_07/24",
        month: Month::July,
        interval: "2",
        crossing: Crossing::Water,
        landfall: "None",
        developed: ParStatus::Within,
        path: "West-Northwestward",
        category: "Tropical Depression",
        wind_speed_kph: 90,
        casualties: 10,
        damage_php: 196_700_000_000.0,
        places: "Region I | Ilocos Region | Ilocos Norte | Ilocos Sur | La Union | Pangasinan | CAR | Cordillera Administrative Region | Apayao | Kalinga | Mountain Province | Ifugao | Benguet | Region II | Cagayan Valley | Cagayan | Isabela | Nueva Vizcaya | Quirino | Region III | Central Luzon | Bataan | Zambales | Aurora | Northern Nueva Ecija | Region IV-A | CALABARZON | Northern Quezon | Polillo Islands | Region IV-B | MIMAROPA | Occidental Mindoro | Oriental Mindoro | Marinduque | Romblon | Palawan | Region V | Bicol Region | Albay | Camarines Norte | Camarines Sur | NCR | Metro Manila | Region VI | Western Visayas | Antique | Aklan | Iloilo | Region VII | Central Visayas | Cebu | Bohol | Region IX | Zamboanga Peninsula | Zamboanga del Norte | Zamboanga del Sur | BARMM | Basilan | Sulu | Tawi-Tawi | Region XIII / Caraga | Surigao del Norte | Surigao del Sur | Agusan del Norte",
    },
    RawRecord {
        name: "Emong",
        arrival: "0300_07/23",
        departure: "0500_07/26",
        month: Month::July,
        interval: "3",
        crossing: Crossing::Land,
        landfall: "2025-07-24 10:40",
        developed: ParStatus::Within,
        path: "West-Southwestward",
        category: "Typhoon",
        wind_speed_kph: 120,
        casualties: 40,
        damage_php: 20_000_000_000.0,
        places: "Region I | Ilocos Region | Ilocos Norte | Ilocos Sur | La Union | Pangasinan | CAR | Cordillera Administrative Region | Apayao | Kalinga | Mountain Province | Ifugao | Benguet | Region II | Cagayan Valley | Cagayan | Isabela | Nueva Vizcaya | Quirino | Region III | Central Luzon | Bataan | Zambales | Aurora | Northern Nueva Ecija | Region IV-A | CALABARZON | Northern Quezon | Polillo Islands | Region IV-B | MIMAROPA | Occidental Mindoro | Oriental Mindoro | Marinduque | Romblon | Palawan | Region V | Bicol Region | Albay | Camarines Norte | Camarines Sur | NCR | Metro Manila | Region VI | Western Visayas | Antique | Aklan | Iloilo | Region VII | Central Visayas | Cebu | Bohol | Region IX | Zamboanga Peninsula | Zamboanga del Norte | Zamboanga del Sur | BARMM | Basilan | Sulu | Tawi-Tawi | Region XIII / Caraga | Surigao del Norte | Surigao del Sur | Agusan del Norte",
    },
    RawRecord {
        name: "Fabian",
        arrival: "1200_08/07",
        departure: "1600_08/13",
        month: Month::August,
        interval: "1",
        crossing: Crossing::Water,
        landfall: "",
        developed: ParStatus::Within,
        path: "West-Northwestward",
        category: "Tropical Depression",
        wind_speed_kph: 45,
        casualties: 40,
        damage_php: 20_000_000_000.0,
        places: "Region I | Ilocos Region | Ilocos Norte | Ilocos Sur | La Union | Pangasinan | CAR | Cordillera Administrative Region | Apayao | Kalinga | Mountain Province | Ifugao | Benguet | Region II | Cagayan Valley | Cagayan | Isabela | Nueva Vizcaya | Quirino | Region III | Central Luzon | Bataan | Zambales | Aurora | Northern Nueva Ecija | Region IV-A | CALABARZON | Northern Quezon | Polillo Islands | Region IV-B | MIMAROPA | Occidental Mindoro | Oriental Mindoro | Marinduque | Romblon | Palawan | Region V | Bicol Region | Albay | Camarines Norte | Camarines Sur | NCR | Metro Manila | Region VI | Western Visayas | Antique | Aklan | Iloilo | Region VII | Central Visayas | Cebu | Bohol | Region IX | Zamboanga Peninsula | Zamboanga del Norte | Zamboanga del Sur | BARMM | Basilan | Sulu | Tawi-Tawi | Region XIII / Caraga | Surigao del Norte | Surigao del Sur | Agusan del Norte",
    },
    RawRecord {
        name: "Gorio",
        arrival: "1120_08/10",
        departure: "0200_08/19",
        month: Month::August,
        interval: "3",
        crossing: Crossing::Water,
        landfall: "None",
        developed: ParStatus::Outside,
        path: "West to West-Northwest",
        category: "Typhoon",
        wind_speed_kph: 155,
        casualties: 0,
        damage_php: 45_000.0,
        places: "Region II | Cagayan Valley | Batanes | Babuyan Islands",
    },
    RawRecord {
        name: "Huaning",
        arrival: "0200_08/17",
        departure: "0600_08/23",
        month: Month::August,
        interval: "2",
        crossing: Crossing::Water,
        landfall: "None",
        developed: ParStatus::Within,
        path: "Northwest to Northeast",
        category: "Tropical Depression",
        wind_speed_kph: 70,
        casualties: 0,
        damage_php: 0.0,
        places: "No significant areas affected (remained offshore)",
    },
    RawRecord {
        name: "Isang",
        arrival: "1000_08/22",
        departure: "1800_08/30",
        month: Month::August,
        interval: "1",
        crossing: Crossing::Land,
        landfall: "10:00_08/22",
        developed: ParStatus::Within,
        path: "Northwest to West",
        category: "Tropical Storm",
        wind_speed_kph: 90,
        casualties: 0,
        damage_php: 0.0,
        places: "Region II | Cagayan Valley | Cagayan | Isabela | Nueva Vizcaya | Quirino | Region I | Ilocos Region | Ilocos Norte | Ilocos Sur | La Union | Pangasinan | CAR | Cordillera Administrative Region | Apayao | Kalinga | Mountain Province | Ifugao | Benguet | Region III | Central Luzon | Aurora | Northern Nueva Ecija | Region V | Bicol Region | Camarines Norte | Region IV-A | CALABARZON | Northern Quezon | Polillo Islands | MIMAROPA | Mindoro | Marinduque | Romblon | Palawan | Occidental Mindoro | Oriental Mindoro | Marinduque | Romblon | NCR | Metro Manila | Region VI | Western Visayas | Antique | Aklan | Iloilo",
    },
    RawRecord {
        name: "Jacinto",
        arrival: "0000_08/28",
        departure: "0400_09/03",
        month: Month::August,
        interval: "2",
        crossing: Crossing::Water,
        landfall: "None",
        developed: ParStatus::Within,
        path: "West to Northwest",
        category: "Tropical Depression",
        wind_speed_kph: 45,
        casualties: 0,
        damage_php: 710_000.0,
        places: "Region I | Ilocos Region | Ilocos Norte | Ilocos Sur | La Union | Pangasinan | CAR | Cordillera Administrative Region | Apayao | Kalinga | Mountain Province | Ifugao | Benguet | Region II | Cagayan Valley | Cagayan | Isabela | Nueva Vizcaya | Quirino | Region III | Central Luzon | Bataan | Zambales | Aurora | Northern Nueva Ecija | Region IV-A | CALABARZON | Northern Quezon | Polillo Islands | Region IV-B | MIMAROPA | Occidental Mindoro | Oriental Mindoro | Marinduque | Romblon | Palawan | Region V | Bicol Region | Albay | Camarines Norte | Camarines Sur | NCR | Metro Manila | Region VI | Western Visayas | Antique | Aklan | Iloilo | Region VII | Central Visayas | Cebu | Bohol | Region IX | Zamboanga Peninsula | Zamboanga del Norte | Zamboanga del Sur | BARMM | Basilan | Sulu | Tawi-Tawi | Region XIII / Caraga | Surigao del Norte | Surigao del Sur | Agusan del Norte",
    },
    RawRecord {
        name: "Kiko",
        arrival: "1200_09/02",
        departure: "0000_09/06",
        month: Month::September,
        interval: "1",
        crossing: Crossing::Water,
        landfall: "None",
        developed: ParStatus::Within,
        path: "East to Northeast",
        category: "Tropical Storm",
        wind_speed_kph: 85,
        casualties: 0,
        damage_php: 0.0,
        places: "Region II | Cagayan Valley | Isabela | Nueva Vizcaya | Quirino | Region III | Central Luzon | Nueva Ecija | Pampanga | Region VI | Western Visayas | Antique | NCR | Metro Manila",
    },
    RawRecord {
        name: "Lannie",
        arrival: "1800_09/05",
        departure: "2300_09/17",
        month: Month::September,
        interval: "1",
        crossing: Crossing::Water,
        landfall: "None",
        developed: ParStatus::Within,
        path: "West to Northwestward",
        category: "Tropical Depression",
        wind_speed_kph: 55,
        casualties: 0,
        damage_php: 0.0,
        places: "Region I | Ilocos Region | Sinait | Ilocos Sur | CAR | Cordillera Administrative Region | Region II | Cagayan Valley | Bayombong | Nueva Ecija | Region III | Zambales | NCR | Metro Manila | Region IV-A / IV-B | CALABARZON | MIMAROPA",
    },
    RawRecord {
        name: "Mirasol",
        arrival: "0000_09/16",
        departure: "0300_09/25",
        month: Month::September,
        interval: "1",
        crossing: Crossing::Land,
        landfall: "19:20_09/16",
        developed: ParStatus::Within,
        path: "East to Northwest",
        category: "Tropical Depression",
        wind_speed_kph: 55,
        casualties: 1,
        damage_php: 0.0,
        places: "Region I | Baler, Aurora | Casiguran, Aurora | Baguio City | Batac, Ilocos Norte | Region II | Bayombong, Nueva Vizcaya | Basco, Batanes | Calayan, Cagayan | Region III | Iba, Zambales | Region IV-A | Baybay City, Leyte | Infanta, Quezon | CAR | La Trinidad, Benguet | Region VIII | Eastern Visayas | Northern Samar | Eastern Samar",
    },
    RawRecord {
        name: "Nando",
        arrival: "2000_09/18",
        departure: "0000_09/24",
        month: Month::September,
        interval: "6",
        crossing: Crossing::Land,
        landfall: "2025-09-22 3:00",
        developed: ParStatus::Within,
        path: "West-northwestward",
        category: "Super Typhoon",
        wind_speed_kph: 215,
        casualties: 200,
        damage_php: 0.0,
        places: "Region I | Batanes (Basco, Sabtang, Itbayat) | Cagayan (Calayan, Aparri, Tuguegarao) | Ilocos Norte (Batac, Laoag) | Ilocos Sur (Vigan, Candon) | La Union (San Fernando) | Region II | Nueva Vizcaya (Bayombong) | Isabela (Ilagan, Santiago) | Quirino (Diffun) | CAR (Cordillera Administrative Region) | Benguet (La Trinidad, Baguio City) | Apayao (Kabugao) | Kalinga (Tabuk) | Region III | Zambales (Iba, Olongapo) | Bataan (Balanga) | Pampanga (San Fernando) | Tarlac (Tarlac City) | Region IV-A (CALABARZON) | Quezon (Infanta, Lucban) | Rizal (Tanay, Antipolo) | Laguna (San Pablo)",
    },
    RawRecord {
        name: "Opong",
        arrival: "1600_09/23",
        departure: "0000_09/27",
        month: Month::September,
        interval: "4",
        crossing: Crossing::Land,
        landfall: "2025-09-26 23:30",
        developed: ParStatus::Within,
        path: "West to Northward",
        category: "Tropical Storm",
        wind_speed_kph: 120,
        casualties: 19,
        damage_php: 1_000_000_000.0,
        places: "Region V / Bicol / Eastern Visayas / MIMAROPA | Eastern Samar (San Policarpo, Arteche, Maslog, Oras, Sulat) | Northern Samar | Samar (Catbalogan City, other towns) | Biliran | Masbate (Masbate City, Aroroy, Mobo, Uson, Dimasalang, Cataingan, Pio V. Corpuz) | Romblon | Occidental Mindoro | Oriental Mindoro (Calapan City, Naujan, Bulalacao, Puerto Galera, Pinamalayan, San Teodoro, Roxas) | Southern Luzon / MIMAROPA coastal areas affected by enhanced southwest monsoon",
    },
    RawRecord {
        name: "Paolo",
        arrival: "1100_10/01",
        departure: "0500_10/04",
        month: Month::October,
        interval: "4",
        crossing: Crossing::Land,
        landfall: "2025-10-03 10:00",
        developed: ParStatus::Within,
        path: "West-northwestward",
        category: "Tropical Storm",
        wind_speed_kph: 135,
        casualties: 1,
        damage_php: 11_000_000.0,
        places: "Region I | Ilocos Region | Northern Ilocos Norte | Region II | Cagayan Valley | Batanes | Babuyan Islands | Region V | Bicol Region | Bicol Region (General) | Region IV-A | CALABARZON | Quezon | Region VIII | Eastern Visayas | Northern Samar | Eastern Samar",
    },
    RawRecord {
        name: "Quedan",
        arrival: "1240_10/09",
        departure: "0200_10/10",
        month: Month::October,
        interval: "1",
        crossing: Crossing::Water,
        landfall: "None",
        developed: ParStatus::Outside,
        path: "northeastward",
        category: "Tropical Storm",
        wind_speed_kph: 70,
        casualties: 0,
        damage_php: 0.0,
        places: "Region I | Ilocos Region | Northern Ilocos Norte | Region II | Cagayan Valley | Batanes | Babuyan Islands | Region V | Bicol Region | Bicol Region (General) | Region IV-A | CALABARZON | Quezon | Region VIII | Eastern Visayas | Northern Samar | Eastern Samar",
    },
    RawRecord {
        name: "Ramil",
        arrival: "1800_10/17",
        departure: "0800_10/20",
        month: Month::October,
        interval: "3",
        crossing: Crossing::Land,
        landfall: "2025-10-18 - 14:00",
        developed: ParStatus::Within,
        path: "West-northwestward",
        category: "Tropical Storm",
        wind_speed_kph: 65,
        casualties: 7,
        damage_php: 0.0,
        places: "Region I | Ilocos Region | Ilocos Norte (Laoag, Batac, Pagudpud) | La Union (San Fernando, Bacnotan) | Pangasinan (Dagupan, Lingayen) | Region II | Cagayan Valley | Cagayan (Tuguegarao, Aparri) | Isabela (Ilagan, Santiago) | Nueva Vizcaya (Bayombong) | Quirino (Diffun) | Batanes (Basco) | Babuyan Islands (Calayan, Camiguin Norte) | Region IV-A | CALABARZON | Quezon (Polillo, Infanta, Lucban) | Rizal (Tanay, Antipolo) | Laguna (San Pablo, Calamba) | Region V | Bicol Region | Camarines Norte (Daet, Labo) | Camarines Sur (Naga, Pili) | Albay (Legazpi, Tabaco) | Sorsogon (Sorsogon City, Bulan) | Region VIII | Eastern Visayas | Northern Samar (Catarman, Laoang) | Eastern Samar (Borongan, San Policarpo)",
    },
    RawRecord {
        name: "Salome",
        arrival: "0800_10/22",
        departure: "1230_11/05",
        month: Month::October,
        interval: "1",
        crossing: Crossing::Water,
        landfall: "05:00_10/23",
        developed: ParStatus::Within,
        path: "Northwestward",
        category: "Tropical Depression",
        wind_speed_kph: 55,
        casualties: 0,
        damage_php: 10_000_000.0,
        places: "Region I | Ilocos Region | Northern Ilocos Norte | Region II | Cagayan Valley | Batanes | Babuyan Islands | Region V | Bicol Region | Bicol Region (General) | Region IV-A | CALABARZON | Quezon | Region VIII | Eastern Visayas | Northern Samar | Eastern Samar",
    },
    RawRecord {
        name: "Tino",
        arrival: "0530_11/02",
        departure: "0500_11/11",
        month: Month::November,
        interval: "3",
        crossing: Crossing::Land,
        landfall: "12:00_11/04",
        developed: ParStatus::Outside,
        path: "West-Northwestward",
        category: "Tropical Storm",
        wind_speed_kph: 85,
        casualties: 253,
        damage_php: 974_000_000.0,
        places: "Region V | Bicol Region | Masbate | Sorsogon | Albay | Region VI | Western Visayas | Iloilo | Negros Occidental | Capiz | Antique | Guimaras | Region VII | Central Visayas | Cebu | Siquijor | Bohol | Region VIII | Eastern Visayas | Southern Leyte | Leyte | Eastern Samar | Northern Samar | Region IV-A | CALABARZON | Quezon | Marinduque | Region IV-B | MIMAROPA | Palawan | Occidental Mindoro | Romblon | Region XIII | Caraga | Dinagat Island | Surigao Del Norte",
    },
    RawRecord {
        name: "Uwan",
        arrival: "2200_11/07",
        departure: "0200_11/27",
        month: Month::November,
        interval: "4",
        crossing: Crossing::Land,
        landfall: "21:10_11/09",
        developed: ParStatus::Outside,
        path: "Northeastward",
        category: "Super Typoon",
        wind_speed_kph: 185,
        casualties: 33,
        damage_php: 818_740_000.0,
        places: "Region V | Bicol Region | Masbate | Sorsogon | Albay | Region VI | Western Visayas | Iloilo | Negros Occidental | Capiz | Antique | Guimaras | Region VII | Central Visayas | Cebu | Siquijor | Bohol | Region VIII | Eastern Visayas | Southern Leyte | Leyte | Eastern Samar | Northern Samar | Region IV-A | CALABARZON | Quezon | Marinduque | Region IV-B | MIMAROPA | Palawan | Occidental Mindoro | Romblon | Region XIII | Caraga | Dinagat Island | Surigao Del Norte",
    },
    RawRecord {
        name: "Verbena",
        arrival: "0200_11/24",
        departure: "1100_12/09",
        month: Month::November,
        interval: "3",
        crossing: Crossing::Land,
        landfall: "2:40_11/25",
        developed: ParStatus::Within,
        path: "West-Northwestward",
        category: "Tropical Depression",
        wind_speed_kph: 140,
        casualties: 0,
        damage_php: 0.0,
        places: "Region IV-B | MIMAROPA | Palawan | Oriental Mindoro | Region VI | Western Visayas | Iloilo | Capiz | Negros Occidental | Region VIII | Eastern Visayas | Southern Leyte | Region X | Northern Mindanao | Lanao del Norte | Misamis Oriental | Camiguin | Region XIII | Caraga | Surigao del Sur | Butuan City | Dinagat Islands | Agusan del Norte",
    },
    RawRecord {
        name: "Wilma",
        arrival: "0600_12/05",
        departure: "0800_12/07",
        month: Month::December,
        interval: "2",
        crossing: Crossing::Land,
        landfall: "2025-12-06 22:50",
        developed: ParStatus::Within,
        path: "West-Southwestward",
        category: "Tropical Depression",
        wind_speed_kph: 55,
        casualties: 0,
        damage_php: 0.0,
        places: "Region IV-A | Quezon | Rizal | Laguna | Batangas | Region IV-B | Oriental Mindoro | Occidental Mindoro | Palawan | Romblon | Region V | Sorsogon | Masbate | Region VI | Iloilo | Capiz | Antique | Region VII | Cebu | Bohol | Negros Oriental | Region VIII | Samar | Eastern Samar | Northern Samar | Leyte | Southern Leyte | Region XIII | Dinagat Islands | Agusan del Norte | Surigao del Norte",
    },
];
