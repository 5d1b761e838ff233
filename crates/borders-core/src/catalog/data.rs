//! Built-in country catalog: every country in the game and its land borders.
//!
//! Borders follow each country's mainland: overseas territories such as French
//! Guiana add no neighbours.

/// `(canonical name, bordering countries)` in alphabetical order.
pub(super) const COUNTRIES: &[(&str, &[&str])] = &[
    ("Afghanistan", &["China", "Iran", "Pakistan", "Tajikistan", "Turkmenistan", "Uzbekistan"]),
    ("Albania", &["Greece", "Kosovo", "Montenegro", "North Macedonia"]),
    ("Algeria", &["Libya", "Mali", "Mauritania", "Morocco", "Niger", "Tunisia", "Western Sahara"]),
    ("Andorra", &["France", "Spain"]),
    ("Angola", &["Democratic Republic of the Congo", "Namibia", "Republic of the Congo", "Zambia"]),
    ("Antigua and Barbuda", &[]),
    ("Argentina", &["Bolivia", "Brazil", "Chile", "Paraguay", "Uruguay"]),
    ("Armenia", &["Azerbaijan", "Georgia", "Iran", "Turkey"]),
    ("Australia", &[]),
    (
        "Austria",
        &[
            "Czech Republic",
            "Germany",
            "Hungary",
            "Italy",
            "Liechtenstein",
            "Slovakia",
            "Slovenia",
            "Switzerland",
        ],
    ),
    ("Azerbaijan", &["Armenia", "Georgia", "Iran", "Russia", "Turkey"]),
    ("Bahamas", &[]),
    ("Bahrain", &[]),
    ("Bangladesh", &["India", "Myanmar"]),
    ("Barbados", &[]),
    ("Belarus", &["Latvia", "Lithuania", "Poland", "Russia", "Ukraine"]),
    ("Belgium", &["France", "Germany", "Luxembourg", "Netherlands"]),
    ("Belize", &["Guatemala", "Mexico"]),
    ("Benin", &["Burkina Faso", "Niger", "Nigeria", "Togo"]),
    ("Bhutan", &["China", "India"]),
    ("Bolivia", &["Argentina", "Brazil", "Chile", "Paraguay", "Peru"]),
    ("Bosnia and Herzegovina", &["Croatia", "Montenegro", "Serbia"]),
    ("Botswana", &["Namibia", "South Africa", "Zambia", "Zimbabwe"]),
    (
        "Brazil",
        &[
            "Argentina",
            "Bolivia",
            "Colombia",
            "Guyana",
            "Paraguay",
            "Peru",
            "Suriname",
            "Uruguay",
            "Venezuela",
        ],
    ),
    ("Brunei", &["Malaysia"]),
    ("Bulgaria", &["Greece", "North Macedonia", "Romania", "Serbia", "Turkey"]),
    ("Burkina Faso", &["Benin", "Ghana", "Ivory Coast", "Mali", "Niger", "Togo"]),
    ("Burundi", &["Democratic Republic of the Congo", "Rwanda", "Tanzania"]),
    ("Cambodia", &["Laos", "Thailand", "Vietnam"]),
    (
        "Cameroon",
        &[
            "Central African Republic",
            "Chad",
            "Equatorial Guinea",
            "Gabon",
            "Nigeria",
            "Republic of the Congo",
        ],
    ),
    ("Canada", &["United States"]),
    ("Cape Verde", &[]),
    (
        "Central African Republic",
        &[
            "Cameroon",
            "Chad",
            "Democratic Republic of the Congo",
            "Republic of the Congo",
            "South Sudan",
            "Sudan",
        ],
    ),
    ("Chad", &["Cameroon", "Central African Republic", "Libya", "Niger", "Nigeria", "Sudan"]),
    ("Chile", &["Argentina", "Bolivia", "Peru"]),
    (
        "China",
        &[
            "Afghanistan",
            "Bhutan",
            "India",
            "Kazakhstan",
            "Kyrgyzstan",
            "Laos",
            "Mongolia",
            "Myanmar",
            "Nepal",
            "North Korea",
            "Pakistan",
            "Russia",
            "Tajikistan",
            "Vietnam",
        ],
    ),
    ("Colombia", &["Brazil", "Ecuador", "Panama", "Peru", "Venezuela"]),
    ("Comoros", &[]),
    ("Costa Rica", &["Nicaragua", "Panama"]),
    ("Croatia", &["Bosnia and Herzegovina", "Hungary", "Montenegro", "Serbia", "Slovenia"]),
    ("Cuba", &[]),
    ("Cyprus", &[]),
    ("Czech Republic", &["Austria", "Germany", "Poland", "Slovakia"]),
    (
        "Democratic Republic of the Congo",
        &[
            "Angola",
            "Burundi",
            "Central African Republic",
            "Republic of the Congo",
            "Rwanda",
            "South Sudan",
            "Tanzania",
            "Uganda",
            "Zambia",
        ],
    ),
    ("Denmark", &["Germany"]),
    ("Djibouti", &["Eritrea", "Ethiopia", "Somalia"]),
    ("Dominica", &[]),
    ("Dominican Republic", &["Haiti"]),
    ("East Timor", &["Indonesia"]),
    ("Ecuador", &["Colombia", "Peru"]),
    ("Egypt", &["Israel", "Libya", "Palestine", "Sudan"]),
    ("El Salvador", &["Guatemala", "Honduras"]),
    ("Equatorial Guinea", &["Cameroon", "Gabon"]),
    ("Eritrea", &["Djibouti", "Ethiopia", "Sudan"]),
    ("Estonia", &["Latvia", "Russia"]),
    ("Eswatini", &["Mozambique", "South Africa"]),
    ("Ethiopia", &["Djibouti", "Eritrea", "Kenya", "Somalia", "South Sudan", "Sudan"]),
    ("Fiji", &[]),
    ("Finland", &["Norway", "Russia", "Sweden"]),
    ("France", &["Belgium", "Germany", "Italy", "Luxembourg", "Monaco", "Spain", "Switzerland"]),
    ("Gabon", &["Cameroon", "Equatorial Guinea", "Republic of the Congo"]),
    ("Gambia", &["Senegal"]),
    ("Georgia", &["Armenia", "Azerbaijan", "Russia", "Turkey"]),
    (
        "Germany",
        &[
            "Austria",
            "Belgium",
            "Czech Republic",
            "Denmark",
            "France",
            "Luxembourg",
            "Netherlands",
            "Poland",
            "Switzerland",
        ],
    ),
    ("Ghana", &["Burkina Faso", "Ivory Coast", "Togo"]),
    ("Greece", &["Albania", "Bulgaria", "North Macedonia", "Turkey"]),
    ("Grenada", &[]),
    ("Guatemala", &["Belize", "El Salvador", "Honduras", "Mexico"]),
    ("Guinea", &["Guinea-Bissau", "Ivory Coast", "Liberia", "Mali", "Senegal", "Sierra Leone"]),
    ("Guinea-Bissau", &["Guinea", "Senegal"]),
    ("Guyana", &["Brazil", "Suriname", "Venezuela"]),
    ("Haiti", &["Dominican Republic"]),
    ("Honduras", &["El Salvador", "Guatemala", "Nicaragua"]),
    ("Hungary", &["Austria", "Croatia", "Romania", "Serbia", "Slovakia", "Slovenia", "Ukraine"]),
    ("Iceland", &[]),
    ("India", &["Bangladesh", "Bhutan", "China", "Myanmar", "Nepal", "Pakistan"]),
    ("Indonesia", &["East Timor", "Malaysia", "Papua New Guinea"]),
    (
        "Iran",
        &[
            "Afghanistan",
            "Armenia",
            "Azerbaijan",
            "Iraq",
            "Pakistan",
            "Turkey",
            "Turkmenistan",
        ],
    ),
    ("Iraq", &["Iran", "Jordan", "Kuwait", "Saudi Arabia", "Syria", "Turkey"]),
    ("Ireland", &["United Kingdom"]),
    ("Israel", &["Egypt", "Jordan", "Lebanon", "Palestine", "Syria"]),
    ("Italy", &["Austria", "France", "San Marino", "Slovenia", "Switzerland", "Vatican City"]),
    ("Ivory Coast", &["Burkina Faso", "Ghana", "Guinea", "Liberia", "Mali"]),
    ("Jamaica", &[]),
    ("Japan", &[]),
    ("Jordan", &["Iraq", "Israel", "Palestine", "Saudi Arabia", "Syria"]),
    ("Kazakhstan", &["China", "Kyrgyzstan", "Russia", "Turkmenistan", "Uzbekistan"]),
    ("Kenya", &["Ethiopia", "Somalia", "South Sudan", "Tanzania", "Uganda"]),
    ("Kiribati", &[]),
    ("Kosovo", &["Albania", "Montenegro", "North Macedonia", "Serbia"]),
    ("Kuwait", &["Iraq", "Saudi Arabia"]),
    ("Kyrgyzstan", &["China", "Kazakhstan", "Tajikistan", "Uzbekistan"]),
    ("Laos", &["Cambodia", "China", "Myanmar", "Thailand", "Vietnam"]),
    ("Latvia", &["Belarus", "Estonia", "Lithuania", "Russia"]),
    ("Lebanon", &["Israel", "Syria"]),
    ("Lesotho", &["South Africa"]),
    ("Liberia", &["Guinea", "Ivory Coast", "Sierra Leone"]),
    ("Libya", &["Algeria", "Chad", "Egypt", "Niger", "Sudan", "Tunisia"]),
    ("Liechtenstein", &["Austria", "Switzerland"]),
    ("Lithuania", &["Belarus", "Latvia", "Poland", "Russia"]),
    ("Luxembourg", &["Belgium", "France", "Germany"]),
    ("Madagascar", &[]),
    ("Malawi", &["Mozambique", "Tanzania", "Zambia"]),
    ("Malaysia", &["Brunei", "Indonesia", "Thailand"]),
    ("Maldives", &[]),
    (
        "Mali",
        &[
            "Algeria",
            "Burkina Faso",
            "Guinea",
            "Ivory Coast",
            "Mauritania",
            "Niger",
            "Senegal",
        ],
    ),
    ("Malta", &[]),
    ("Marshall Islands", &[]),
    ("Mauritania", &["Algeria", "Mali", "Senegal", "Western Sahara"]),
    ("Mauritius", &[]),
    ("Mexico", &["Belize", "Guatemala", "United States"]),
    ("Micronesia", &[]),
    ("Moldova", &["Romania", "Ukraine"]),
    ("Monaco", &["France"]),
    ("Mongolia", &["China", "Russia"]),
    ("Montenegro", &["Albania", "Bosnia and Herzegovina", "Croatia", "Kosovo", "Serbia"]),
    ("Morocco", &["Algeria", "Spain", "Western Sahara"]),
    ("Mozambique", &["Eswatini", "Malawi", "South Africa", "Tanzania", "Zambia", "Zimbabwe"]),
    ("Myanmar", &["Bangladesh", "China", "India", "Laos", "Thailand"]),
    ("Namibia", &["Angola", "Botswana", "South Africa", "Zambia"]),
    ("Nauru", &[]),
    ("Nepal", &["China", "India"]),
    ("Netherlands", &["Belgium", "Germany"]),
    ("New Zealand", &[]),
    ("Nicaragua", &["Costa Rica", "Honduras"]),
    ("Niger", &["Algeria", "Benin", "Burkina Faso", "Chad", "Libya", "Mali", "Nigeria"]),
    ("Nigeria", &["Benin", "Cameroon", "Chad", "Niger"]),
    ("North Korea", &["China", "Russia", "South Korea"]),
    ("North Macedonia", &["Albania", "Bulgaria", "Greece", "Kosovo", "Serbia"]),
    ("Norway", &["Finland", "Russia", "Sweden"]),
    ("Oman", &["Saudi Arabia", "United Arab Emirates", "Yemen"]),
    ("Pakistan", &["Afghanistan", "China", "India", "Iran"]),
    ("Palau", &[]),
    ("Palestine", &["Egypt", "Israel", "Jordan"]),
    ("Panama", &["Colombia", "Costa Rica"]),
    ("Papua New Guinea", &["Indonesia"]),
    ("Paraguay", &["Argentina", "Bolivia", "Brazil"]),
    ("Peru", &["Bolivia", "Brazil", "Chile", "Colombia", "Ecuador"]),
    ("Philippines", &[]),
    (
        "Poland",
        &[
            "Belarus",
            "Czech Republic",
            "Germany",
            "Lithuania",
            "Russia",
            "Slovakia",
            "Ukraine",
        ],
    ),
    ("Portugal", &["Spain"]),
    ("Qatar", &["Saudi Arabia"]),
    (
        "Republic of the Congo",
        &[
            "Angola",
            "Cameroon",
            "Central African Republic",
            "Democratic Republic of the Congo",
            "Gabon",
        ],
    ),
    ("Romania", &["Bulgaria", "Hungary", "Moldova", "Serbia", "Ukraine"]),
    (
        "Russia",
        &[
            "Azerbaijan",
            "Belarus",
            "China",
            "Estonia",
            "Finland",
            "Georgia",
            "Kazakhstan",
            "Latvia",
            "Lithuania",
            "Mongolia",
            "North Korea",
            "Norway",
            "Poland",
            "Ukraine",
        ],
    ),
    ("Rwanda", &["Burundi", "Democratic Republic of the Congo", "Tanzania", "Uganda"]),
    ("Saint Kitts and Nevis", &[]),
    ("Saint Lucia", &[]),
    ("Saint Vincent and the Grenadines", &[]),
    ("Samoa", &[]),
    ("San Marino", &["Italy"]),
    ("Sao Tome and Principe", &[]),
    (
        "Saudi Arabia",
        &[
            "Iraq",
            "Jordan",
            "Kuwait",
            "Oman",
            "Qatar",
            "United Arab Emirates",
            "Yemen",
        ],
    ),
    ("Senegal", &["Gambia", "Guinea", "Guinea-Bissau", "Mali", "Mauritania"]),
    (
        "Serbia",
        &[
            "Bosnia and Herzegovina",
            "Bulgaria",
            "Croatia",
            "Hungary",
            "Kosovo",
            "Montenegro",
            "North Macedonia",
            "Romania",
        ],
    ),
    ("Seychelles", &[]),
    ("Sierra Leone", &["Guinea", "Liberia"]),
    ("Singapore", &[]),
    ("Slovakia", &["Austria", "Czech Republic", "Hungary", "Poland", "Ukraine"]),
    ("Slovenia", &["Austria", "Croatia", "Hungary", "Italy"]),
    ("Solomon Islands", &[]),
    ("Somalia", &["Djibouti", "Ethiopia", "Kenya"]),
    ("South Africa", &["Botswana", "Eswatini", "Lesotho", "Mozambique", "Namibia", "Zimbabwe"]),
    ("South Korea", &["North Korea"]),
    (
        "South Sudan",
        &[
            "Central African Republic",
            "Democratic Republic of the Congo",
            "Ethiopia",
            "Kenya",
            "Sudan",
            "Uganda",
        ],
    ),
    ("Spain", &["Andorra", "France", "Morocco", "Portugal"]),
    ("Sri Lanka", &[]),
    (
        "Sudan",
        &[
            "Central African Republic",
            "Chad",
            "Egypt",
            "Eritrea",
            "Ethiopia",
            "Libya",
            "South Sudan",
        ],
    ),
    ("Suriname", &["Brazil", "Guyana"]),
    ("Sweden", &["Finland", "Norway"]),
    ("Switzerland", &["Austria", "France", "Germany", "Italy", "Liechtenstein"]),
    ("Syria", &["Iraq", "Israel", "Jordan", "Lebanon", "Turkey"]),
    ("Taiwan", &[]),
    ("Tajikistan", &["Afghanistan", "China", "Kyrgyzstan", "Uzbekistan"]),
    (
        "Tanzania",
        &[
            "Burundi",
            "Democratic Republic of the Congo",
            "Kenya",
            "Malawi",
            "Mozambique",
            "Rwanda",
            "Uganda",
            "Zambia",
        ],
    ),
    ("Thailand", &["Cambodia", "Laos", "Malaysia", "Myanmar"]),
    ("Togo", &["Benin", "Burkina Faso", "Ghana"]),
    ("Tonga", &[]),
    ("Trinidad and Tobago", &[]),
    ("Tunisia", &["Algeria", "Libya"]),
    (
        "Turkey",
        &[
            "Armenia",
            "Azerbaijan",
            "Bulgaria",
            "Georgia",
            "Greece",
            "Iran",
            "Iraq",
            "Syria",
        ],
    ),
    ("Turkmenistan", &["Afghanistan", "Iran", "Kazakhstan", "Uzbekistan"]),
    ("Tuvalu", &[]),
    ("Uganda", &["Democratic Republic of the Congo", "Kenya", "Rwanda", "South Sudan", "Tanzania"]),
    ("Ukraine", &["Belarus", "Hungary", "Moldova", "Poland", "Romania", "Russia", "Slovakia"]),
    ("United Arab Emirates", &["Oman", "Saudi Arabia"]),
    ("United Kingdom", &["Ireland"]),
    ("United States", &["Canada", "Mexico"]),
    ("Uruguay", &["Argentina", "Brazil"]),
    ("Uzbekistan", &["Afghanistan", "Kazakhstan", "Kyrgyzstan", "Tajikistan", "Turkmenistan"]),
    ("Vanuatu", &[]),
    ("Vatican City", &["Italy"]),
    ("Venezuela", &["Brazil", "Colombia", "Guyana"]),
    ("Vietnam", &["Cambodia", "China", "Laos"]),
    ("Western Sahara", &["Algeria", "Mauritania", "Morocco"]),
    ("Yemen", &["Oman", "Saudi Arabia"]),
    (
        "Zambia",
        &[
            "Angola",
            "Botswana",
            "Democratic Republic of the Congo",
            "Malawi",
            "Mozambique",
            "Namibia",
            "Tanzania",
            "Zimbabwe",
        ],
    ),
    ("Zimbabwe", &["Botswana", "Mozambique", "South Africa", "Zambia"]),
];
