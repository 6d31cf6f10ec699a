use super::CropRecommendation;

pub(super) static INDIA: &[CropRecommendation] = &[
    CropRecommendation {
        name: "Chickpea",
        season: "Rabi (Winter)",
        water_needs: "Low - Moderate",
        temperature: "15-25°C",
        duration: "90-120 days",
        rating: 4.8,
        tips: &["Drought tolerant", "Fixes nitrogen in soil", "Best for red soils"],
    },
    CropRecommendation {
        name: "Lentil",
        season: "Rabi (Winter)",
        water_needs: "Low",
        temperature: "10-20°C",
        duration: "100-130 days",
        rating: 4.6,
        tips: &[
            "Minimal water requirements",
            "High protein content",
            "Good rotation crop",
        ],
    },
    CropRecommendation {
        name: "Mustard",
        season: "Rabi (Winter)",
        water_needs: "Moderate",
        temperature: "12-25°C",
        duration: "110-140 days",
        rating: 4.5,
        tips: &[
            "Oil seed crop",
            "Cold tolerant",
            "Pest resistant varieties available",
        ],
    },
    CropRecommendation {
        name: "Wheat",
        season: "Rabi (Winter)",
        water_needs: "Moderate",
        temperature: "15-25°C",
        duration: "120-150 days",
        rating: 4.7,
        tips: &[
            "Short-duration varieties recommended",
            "Requires timely irrigation",
            "High yield potential",
        ],
    },
    CropRecommendation {
        name: "Fenugreek",
        season: "Rabi (Winter)",
        water_needs: "Low",
        temperature: "10-25°C",
        duration: "90-120 days",
        rating: 4.3,
        tips: &[
            "Dual purpose crop",
            "Improves soil health",
            "Used in spices & medicine",
        ],
    },
];

pub(super) static UNITED_STATES: &[CropRecommendation] = &[
    CropRecommendation {
        name: "Winter Wheat",
        season: "Fall planted",
        water_needs: "Moderate",
        temperature: "4-24°C",
        duration: "220-250 days",
        rating: 4.7,
        tips: &[
            "Seed after the Hessian fly-free date",
            "Needs vernalization over winter",
            "Topdress nitrogen at green-up",
        ],
    },
    CropRecommendation {
        name: "Cereal Rye",
        season: "Fall cover crop",
        water_needs: "Low",
        temperature: "2-25°C",
        duration: "180-210 days",
        rating: 4.6,
        tips: &[
            "Most winter-hardy cover crop",
            "Scavenges leftover nitrogen",
            "Terminate before it heads out",
        ],
    },
    CropRecommendation {
        name: "Garlic",
        season: "Fall planted",
        water_needs: "Moderate",
        temperature: "0-24°C",
        duration: "240-270 days",
        rating: 4.4,
        tips: &[
            "Plant cloves 4-6 weeks before ground freezes",
            "Mulch heavily in cold zones",
            "Stop watering two weeks before harvest",
        ],
    },
    CropRecommendation {
        name: "Spinach",
        season: "Cool season",
        water_needs: "Moderate",
        temperature: "5-20°C",
        duration: "40-50 days",
        rating: 4.3,
        tips: &[
            "Bolts in long warm days",
            "Overwinters under row cover",
            "Succession sow every two weeks",
        ],
    },
    CropRecommendation {
        name: "Kale",
        season: "Cool season",
        water_needs: "Moderate",
        temperature: "5-24°C",
        duration: "55-75 days",
        rating: 4.2,
        tips: &[
            "Flavor sweetens after frost",
            "Harvest outer leaves first",
            "Watch for cabbage worms",
        ],
    },
];

pub(super) static CHINA: &[CropRecommendation] = &[
    CropRecommendation {
        name: "Winter Wheat",
        season: "Autumn sown",
        water_needs: "Moderate",
        temperature: "5-22°C",
        duration: "230-260 days",
        rating: 4.8,
        tips: &[
            "Staple of the North China Plain",
            "Irrigate before winter freeze",
            "Follows summer maize in rotation",
        ],
    },
    CropRecommendation {
        name: "Rapeseed",
        season: "Autumn sown",
        water_needs: "Moderate",
        temperature: "8-22°C",
        duration: "200-230 days",
        rating: 4.6,
        tips: &[
            "Main oil crop of the Yangtze basin",
            "Transplant seedlings for higher yield",
            "Needs boron on deficient soils",
        ],
    },
    CropRecommendation {
        name: "Broad Bean",
        season: "Autumn sown",
        water_needs: "Low - Moderate",
        temperature: "7-20°C",
        duration: "180-210 days",
        rating: 4.4,
        tips: &[
            "Fixes nitrogen for the following rice crop",
            "Tolerates light frost",
            "Pinch tips to deter aphids",
        ],
    },
    CropRecommendation {
        name: "Chinese Cabbage",
        season: "Cool season",
        water_needs: "High",
        temperature: "12-22°C",
        duration: "60-90 days",
        rating: 4.5,
        tips: &[
            "Sow after the autumn heat breaks",
            "Keep soil evenly moist",
            "Store well in cold cellars",
        ],
    },
    CropRecommendation {
        name: "Garlic",
        season: "Autumn sown",
        water_needs: "Moderate",
        temperature: "0-24°C",
        duration: "220-250 days",
        rating: 4.3,
        tips: &[
            "Shandong is the main growing region",
            "Cover with plastic film over winter",
            "Harvest scapes for extra income",
        ],
    },
];
