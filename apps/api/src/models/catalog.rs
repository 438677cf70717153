//! Fixed option lists the wizard resolves user choices against:
//! countries with their dial codes and cities, and degree / school options.

use serde::Serialize;

/// Sentinel option that routes a choice to its paired free-text field.
pub const OTHER_OPTION: &str = "Other";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub name: &'static str,
    pub dial_code: &'static str,
    #[serde(skip)]
    pub cities: &'static [&'static str],
}

impl Country {
    pub fn has_city(&self, city: &str) -> bool {
        self.cities.contains(&city)
    }
}

pub const COUNTRIES: &[Country] = &[
    Country {
        name: "Philippines",
        dial_code: "+63",
        cities: &[
            "Alaminos City", "Angeles City", "Antipolo City", "Aparri", "Baguio City",
            "Balanga City", "Batac City", "Batangas City", "Bayawan City", "Baybay City",
            "Bayugan City", "Biñan City", "Bislig City", "Bogo City", "Borongan City",
            "Butuan City", "Cabadbaran City", "Cabanatuan City", "Cabuyao City", "Cadiz City",
            "Cagayan de Oro City", "Calamba City", "Calapan City", "Calbayog City",
            "Caloocan City", "Candon City", "Canlaon City", "Carcar City", "Catbalogan City",
            "Cauayan City", "Cavite City", "Cebu City", "Cotabato City", "Dagupan City",
            "Danao City", "Dapitan City", "Dasmarinas City", "Davao City", "Digos City",
            "Dipolog City", "Dumaguete City", "El Salvador City", "Escalante City", "Gapan City",
            "General Santos City", "General Trias City", "Gingoog City", "Guihulngan City",
            "Himamaylan City", "Ilagan City", "Iligan City", "Iloilo City", "Imus City",
            "Iriga City", "Isabela City", "Kabankalan City", "Kidapawan City", "Koronadal City",
            "La Carlota City", "Lamitan City", "Laoag City", "Las Piñas City", "Legazpi City",
            "Ligao City", "Lipa City", "Lucena City", "Maasin City", "Makati City", "Malabon City",
            "Malaybalay City", "Malolos City", "Mandaluyong City", "Mandaue City", "Manila City",
            "Marawi City", "Marikina City", "Masbate City", "Mati City", "Meycauayan City",
            "Muntinlupa City", "Naga City", "Navotas City", "Olongapo City", "Ormoc City",
            "Oroquieta City", "Ozamiz City", "Pagadian City", "Palayan City", "Panabo City",
            "Parañaque City", "Pasay City", "Pasig City", "Puerto Princesa City", "Quezon City",
            "Roxas City", "Sagay City", "San Carlos City", "San Fernando City", "San Jose City",
            "San Jose del Monte City", "San Juan City", "San Pablo City", "San Pedro City",
            "Santa Rosa City", "Santiago City", "Silay City", "Sipalay City", "Sorsogon City",
            "Surigao City", "Tabaco City", "Tabuk City", "Tacloban City", "Tacurong City",
            "Tagaytay City", "Tagbilaran City", "Taguig City", "Tagum City", "Talisay City",
            "Tanauan City", "Tandag City", "Tangub City", "Tanjay City", "Tarlac City",
            "Tayabas City", "Toledo City", "Trece Martires City", "Tuguegarao City",
            "Urdaneta City", "Valencia City", "Valenzuela City", "Victorias City", "Vigan City",
            "Zamboanga City",
        ],
    },
    Country {
        name: "United States",
        dial_code: "+1",
        cities: &[
            "New York", "Los Angeles", "Chicago", "Houston", "Phoenix", "Philadelphia",
            "San Antonio", "San Diego", "Dallas", "San Jose", "Austin", "Jacksonville",
            "Fort Worth", "Columbus", "San Francisco", "Charlotte", "Indianapolis", "Seattle",
            "Denver", "Boston",
        ],
    },
    Country {
        name: "United Kingdom",
        dial_code: "+44",
        cities: &[
            "London", "Birmingham", "Leeds", "Glasgow", "Sheffield", "Manchester", "Edinburgh",
            "Liverpool", "Bristol", "Cardiff", "Belfast", "Leicester", "Coventry", "Nottingham",
            "Newcastle", "Southampton", "Portsmouth", "Oxford", "Cambridge", "Aberdeen",
        ],
    },
    Country {
        name: "Canada",
        dial_code: "+1",
        cities: &[
            "Toronto", "Montreal", "Vancouver", "Calgary", "Edmonton", "Ottawa", "Quebec City",
            "Winnipeg", "Hamilton", "Halifax", "Victoria", "London", "Saskatoon", "Regina",
            "St. John's", "Fredericton", "Charlottetown", "Whitehorse", "Yellowknife", "Iqaluit",
        ],
    },
    Country {
        name: "Australia",
        dial_code: "+61",
        cities: &[
            "Sydney", "Melbourne", "Brisbane", "Perth", "Adelaide", "Gold Coast", "Newcastle",
            "Canberra", "Wollongong", "Hobart", "Darwin", "Cairns", "Townsville", "Geelong",
            "Alice Springs", "Launceston", "Ballarat", "Bendigo", "Albury", "Wodonga",
        ],
    },
    Country {
        name: "Japan",
        dial_code: "+81",
        cities: &[
            "Tokyo", "Yokohama", "Osaka", "Nagoya", "Sapporo", "Fukuoka", "Kobe", "Kyoto",
            "Kawasaki", "Saitama", "Hiroshima", "Sendai", "Chiba", "Kitakyushu", "Sakai",
            "Niigata", "Hamamatsu", "Kumamoto", "Sagamihara", "Shizuoka",
        ],
    },
    Country {
        name: "South Korea",
        dial_code: "+82",
        cities: &[
            "Seoul", "Busan", "Incheon", "Daegu", "Daejeon", "Gwangju", "Suwon", "Ulsan",
            "Seongnam", "Goyang", "Bucheon", "Cheongju", "Ansan", "Anyang", "Changwon", "Jeonju",
            "Pohang", "Uijeongbu", "Hwaseong", "Yongin",
        ],
    },
    Country {
        name: "Singapore",
        dial_code: "+65",
        cities: &[
            "Singapore Central", "Woodlands", "Tampines", "Jurong East", "Punggol", "Pasir Ris",
            "Yishun", "Sengkang", "Ang Mo Kio", "Bedok", "Hougang", "Clementi", "Choa Chu Kang",
            "Bukit Batok", "Bukit Panjang", "Serangoon", "Toa Payoh", "Bishan", "Geylang",
            "Queenstown",
        ],
    },
    Country {
        name: "Malaysia",
        dial_code: "+60",
        cities: &[
            "Kuala Lumpur", "George Town", "Ipoh", "Johor Bahru", "Petaling Jaya", "Shah Alam",
            "Melaka", "Kota Kinabalu", "Seremban", "Kuching", "Subang Jaya", "Cyberjaya",
            "Putrajaya", "Kota Bharu", "Kuantan", "Alor Setar", "Kangar", "Miri", "Sibu",
            "Sandakan",
        ],
    },
    Country {
        name: "Indonesia",
        dial_code: "+62",
        cities: &[
            "Jakarta", "Surabaya", "Bandung", "Medan", "Semarang", "Makassar", "Palembang",
            "Tangerang", "Depok", "Bekasi", "Malang", "Padang", "Denpasar", "Banjarmasin",
            "Balikpapan", "Manado", "Yogyakarta", "Pontianak", "Samarinda", "Jambi",
        ],
    },
    Country {
        name: "Thailand",
        dial_code: "+66",
        cities: &[
            "Bangkok", "Nonthaburi", "Nakhon Ratchasima", "Chiang Mai", "Hat Yai", "Udon Thani",
            "Pak Kret", "Khon Kaen", "Pattaya", "Songkhla", "Phuket", "Chiang Rai", "Ayutthaya",
            "Surat Thani", "Nakhon Sawan", "Ubon Ratchathani", "Nakhon Pathom", "Rayong",
            "Chonburi", "Phitsanulok",
        ],
    },
    Country {
        name: "Vietnam",
        dial_code: "+84",
        cities: &[
            "Ho Chi Minh City", "Hanoi", "Da Nang", "Haiphong", "Can Tho", "Bien Hoa", "Hue",
            "Nha Trang", "Vinh", "Nam Dinh", "Vung Tau", "Qui Nhon", "Thai Nguyen", "Long Xuyen",
            "Hong Gai", "Thanh Hoa", "Thai Binh", "Ca Mau", "Rach Gia", "Cam Ranh",
        ],
    },
    Country {
        name: "India",
        dial_code: "+91",
        cities: &[
            "Mumbai", "Delhi", "Bangalore", "Hyderabad", "Chennai", "Kolkata", "Pune", "Ahmedabad",
            "Jaipur", "Surat", "Lucknow", "Kanpur", "Nagpur", "Indore", "Thane", "Bhopal",
            "Visakhapatnam", "Patna", "Vadodara", "Ghaziabad",
        ],
    },
    Country {
        name: "China",
        dial_code: "+86",
        cities: &[
            "Shanghai", "Beijing", "Guangzhou", "Shenzhen", "Chengdu", "Tianjin", "Wuhan",
            "Dongguan", "Chongqing", "Nanjing", "Hangzhou", "Foshan", "Shenyang", "Xi'an",
            "Suzhou", "Harbin", "Qingdao", "Dalian", "Xiamen", "Zhengzhou",
        ],
    },
    Country {
        name: "Germany",
        dial_code: "+49",
        cities: &[
            "Berlin", "Hamburg", "Munich", "Cologne", "Frankfurt", "Stuttgart", "Düsseldorf",
            "Leipzig", "Dortmund", "Essen", "Bremen", "Dresden", "Hanover", "Nuremberg",
            "Duisburg", "Bochum", "Wuppertal", "Bielefeld", "Bonn", "Münster",
        ],
    },
    Country {
        name: "France",
        dial_code: "+33",
        cities: &[
            "Paris", "Marseille", "Lyon", "Toulouse", "Nice", "Nantes", "Strasbourg",
            "Montpellier", "Bordeaux", "Lille", "Rennes", "Reims", "Saint-Étienne", "Toulon",
            "Le Havre", "Grenoble", "Dijon", "Angers", "Nîmes", "Villeurbanne",
        ],
    },
];

pub const DEGREE_OPTIONS: &[&str] = &[
    "High School Diploma",
    "Associate Degree",
    "Bachelor of Arts",
    "Bachelor of Science",
    "Bachelor of Engineering",
    "Master of Arts",
    "Master of Science",
    "Master of Business Administration",
    "Doctor of Philosophy",
    OTHER_OPTION,
];

pub const SCHOOL_OPTIONS: &[&str] = &[
    "University of the Philippines",
    "Ateneo de Manila University",
    "De La Salle University",
    "Massachusetts Institute of Technology",
    "Stanford University",
    "University of Oxford",
    "University of Cambridge",
    "University of Toronto",
    "University of Melbourne",
    "University of Tokyo",
    "Seoul National University",
    "National University of Singapore",
    "Indian Institute of Technology Bombay",
    "Tsinghua University",
    "Technical University of Munich",
    "Sorbonne University",
    OTHER_OPTION,
];

pub fn find_country(name: &str) -> Option<&'static Country> {
    COUNTRIES.iter().find(|country| country.name == name)
}

/// Resolves an enumerated choice. `Other` takes the paired custom value instead.
///
/// Returns a human-readable reason when the choice cannot be resolved.
pub fn resolve_option(
    field: &str,
    choice: &str,
    custom: &str,
    options: &[&str],
) -> Result<String, String> {
    let choice = choice.trim();
    if choice.is_empty() {
        return Err(format!("{field} is required"));
    }
    if choice == OTHER_OPTION {
        let custom = custom.trim();
        if custom.is_empty() {
            return Err(format!("{field} is '{OTHER_OPTION}' but no custom value was given"));
        }
        return Ok(custom.to_string());
    }
    if options.contains(&choice) {
        Ok(choice.to_string())
    } else {
        Err(format!("'{choice}' is not a recognised {field}"))
    }
}
