use super::TipCategory;

pub(super) static INDIA: &[TipCategory] = &[
    TipCategory {
        id: "climate",
        title: "Climate Utilization",
        tips: &[
            "Warm early winters ideal for rabi crops like wheat, chickpea, and mustard",
            "Choose short-duration, drought-tolerant varieties for regions with less rainfall",
            "Monitor temperature fluctuations for pest outbreaks",
            "Utilize monsoon moisture for kharif season crops",
            "Plan sowing around monsoon withdrawal patterns",
        ],
    },
    TipCategory {
        id: "soil-prep",
        title: "Soil Preparation",
        tips: &[
            "Practice conservation tillage to retain soil moisture",
            "Add organic amendments like FYM and vermicompost",
            "Test soil pH and nutrient levels before sowing",
            "Deep summer plowing helps control soil-borne pests",
            "Create raised beds for better drainage in flood-prone areas",
        ],
    },
    TipCategory {
        id: "irrigation",
        title: "Irrigation Efficiency",
        tips: &[
            "Drip irrigation saves 40-60% water compared to flood irrigation",
            "Irrigate during early morning or late evening to reduce evaporation",
            "Use mulching to conserve soil moisture",
            "Monitor soil moisture with simple tensiometers",
            "Consider rainwater harvesting for supplementary irrigation",
        ],
    },
    TipCategory {
        id: "frost",
        title: "Weather Protection",
        tips: &[
            "Use row covers for frost protection in north India",
            "Install shade nets during extreme heat in summer",
            "Create windbreaks to protect crops from hot winds (loo)",
            "Monitor weather forecasts from IMD regularly",
            "Use sprinkler irrigation during frost conditions",
        ],
    },
    TipCategory {
        id: "support",
        title: "Local Support Resources",
        tips: &[
            "Contact Krishi Vigyan Kendra (KVK) for guidance",
            "Subscribe to mKisan SMS service for weather alerts",
            "Join Farmer Producer Organizations (FPOs) for better market access",
            "Access PM-KISAN and other government subsidy programs",
            "Attend agricultural melas and training programs",
        ],
    },
];

pub(super) static UNITED_STATES: &[TipCategory] = &[
    TipCategory {
        id: "climate",
        title: "Climate Utilization",
        tips: &[
            "Utilize extended growing seasons in southern states",
            "Plan for frost dates based on USDA hardiness zones",
            "Choose heat-tolerant varieties for warming climate",
            "Monitor ENSO patterns for seasonal planning",
            "Leverage cover crops for soil health and carbon sequestration",
        ],
    },
    TipCategory {
        id: "soil-prep",
        title: "Soil Preparation",
        tips: &[
            "Practice no-till or minimum tillage for soil conservation",
            "Implement crop rotation with legumes for nitrogen fixation",
            "Test soil through county extension services",
            "Use precision agriculture for variable-rate application",
            "Control erosion with contour farming on slopes",
        ],
    },
    TipCategory {
        id: "irrigation",
        title: "Irrigation Efficiency",
        tips: &[
            "Install center pivot systems with GPS guidance",
            "Use soil moisture sensors for precision irrigation",
            "Implement deficit irrigation strategies for water conservation",
            "Consider subsurface drip for high-value crops",
            "Monitor evapotranspiration rates for scheduling",
        ],
    },
    TipCategory {
        id: "frost",
        title: "Weather Protection",
        tips: &[
            "Use frost blankets for early spring plantings",
            "Install wind machines for orchard frost protection",
            "Monitor NWS frost advisories and alerts",
            "Use high tunnels for season extension",
            "Consider insurance options for weather risks",
        ],
    },
    TipCategory {
        id: "support",
        title: "Local Support Resources",
        tips: &[
            "Contact USDA-NRCS for conservation planning",
            "Access FSA programs for financial assistance",
            "Connect with county extension agents",
            "Join commodity associations for market information",
            "Explore USDA organic certification programs",
        ],
    },
];

pub(super) static CHINA: &[TipCategory] = &[
    TipCategory {
        id: "climate",
        title: "Climate Utilization",
        tips: &[
            "Optimize double-cropping systems based on regional climate",
            "Monitor monsoon patterns for rice cultivation",
            "Choose cold-tolerant varieties for northern regions",
            "Utilize greenhouse technology for extended seasons",
            "Plan crop calendars around traditional solar terms",
        ],
    },
    TipCategory {
        id: "soil-prep",
        title: "Soil Preparation",
        tips: &[
            "Practice rice-wheat rotation in suitable regions",
            "Apply organic fertilizers to improve soil structure",
            "Test soil fertility through local agricultural stations",
            "Use green manure crops for soil improvement",
            "Control salinization in irrigated areas",
        ],
    },
    TipCategory {
        id: "irrigation",
        title: "Irrigation Efficiency",
        tips: &[
            "Implement alternate wetting and drying for rice",
            "Use canal lining to reduce water losses",
            "Install drip systems for fruit and vegetable crops",
            "Practice water-saving irrigation techniques",
            "Harvest rainwater for supplementary irrigation",
        ],
    },
    TipCategory {
        id: "frost",
        title: "Weather Protection",
        tips: &[
            "Use plastic film mulching for temperature control",
            "Install cold frames for early vegetable production",
            "Monitor weather forecasts from CMA",
            "Use sprinkler systems for frost protection",
            "Select frost-resistant crop varieties",
        ],
    },
    TipCategory {
        id: "support",
        title: "Local Support Resources",
        tips: &[
            "Contact local agricultural technology extension centers",
            "Access government subsidy programs for farming",
            "Join agricultural cooperatives for better market access",
            "Participate in agricultural training programs",
            "Consult agricultural universities for technical support",
        ],
    },
];
