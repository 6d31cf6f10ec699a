use super::ColdStorageFacility;

pub(super) static INDIA: &[ColdStorageFacility] = &[
    ColdStorageFacility {
        name: "Narmada Agri Cold Chain",
        city: "Bhopal",
        region: "Madhya Pradesh",
        distance: "12 km",
        cost: "₹2 - ₹4 / quintal / day",
        capacity: "8,000 tons",
        contact: "+91 755 000 0142",
        hours: "24/7 Operations",
        rating: 4.6,
    },
    ColdStorageFacility {
        name: "Malwa Fresh Storage",
        city: "Indore",
        region: "Madhya Pradesh",
        distance: "190 km",
        cost: "₹1.5 - ₹3.5 / quintal / day",
        capacity: "12,000 tons",
        contact: "+91 731 000 0318",
        hours: "6 AM - 10 PM",
        rating: 4.4,
    },
    ColdStorageFacility {
        name: "Vidarbha Kisan Cold Store",
        city: "Nagpur",
        region: "Maharashtra",
        distance: "350 km",
        cost: "₹1.8 - ₹3 / quintal / day",
        capacity: "15,000 tons",
        contact: "+91 712 000 0527",
        hours: "24/7 Operations",
        rating: 4.5,
    },
    ColdStorageFacility {
        name: "Doaba Potato Storage",
        city: "Jalandhar",
        region: "Punjab",
        distance: "1,050 km",
        cost: "₹1.2 - ₹2.5 / quintal / day",
        capacity: "25,000 tons",
        contact: "+91 181 000 0739",
        hours: "7 AM - 9 PM",
        rating: 4.3,
    },
];

pub(super) static UNITED_STATES: &[ColdStorageFacility] = &[
    ColdStorageFacility {
        name: "Lineage Logistics",
        city: "Los Angeles",
        region: "California",
        distance: "15 miles",
        cost: "$0.50 - $1.50 / quintal / day",
        capacity: "50,000 tons",
        contact: "+1 (310) 555-0123",
        hours: "24/7 Operations",
        rating: 4.8,
    },
    ColdStorageFacility {
        name: "Americold Logistics",
        city: "Los Angeles",
        region: "California",
        distance: "22 miles",
        cost: "$0.40 - $1.20 / quintal / day",
        capacity: "75,000 tons",
        contact: "+1 (310) 555-0456",
        hours: "24/7 Operations",
        rating: 4.6,
    },
    ColdStorageFacility {
        name: "Americold Richmond",
        city: "Bay Area",
        region: "California",
        distance: "370 miles",
        cost: "$0.35 - $1.00 / quintal / day",
        capacity: "100,000 tons",
        contact: "+1 (510) 555-0789",
        hours: "6 AM - 10 PM",
        rating: 4.7,
    },
    ColdStorageFacility {
        name: "United States Cold Storage",
        city: "Fresno",
        region: "California",
        distance: "210 miles",
        cost: "$0.30 - $0.90 / quintal / day",
        capacity: "80,000 tons",
        contact: "+1 (559) 555-0321",
        hours: "24/7 Operations",
        rating: 4.5,
    },
    ColdStorageFacility {
        name: "Heartland Cold Storage",
        city: "Des Moines",
        region: "Iowa",
        distance: "1,700 miles",
        cost: "$0.25 - $0.80 / quintal / day",
        capacity: "60,000 tons",
        contact: "+1 (515) 555-0178",
        hours: "24/7 Operations",
        rating: 4.4,
    },
];

pub(super) static CHINA: &[ColdStorageFacility] = &[
    ColdStorageFacility {
        name: "Shouguang Produce Cold Chain",
        city: "Shouguang",
        region: "Shandong",
        distance: "25 km",
        cost: "¥3 - ¥6 / quintal / day",
        capacity: "40,000 tons",
        contact: "+86 536 000 0211",
        hours: "24/7 Operations",
        rating: 4.6,
    },
    ColdStorageFacility {
        name: "Zhengzhou Grain Logistics",
        city: "Zhengzhou",
        region: "Henan",
        distance: "480 km",
        cost: "¥2.5 - ¥5 / quintal / day",
        capacity: "90,000 tons",
        contact: "+86 371 000 0433",
        hours: "24/7 Operations",
        rating: 4.5,
    },
    ColdStorageFacility {
        name: "Jiangnan Fresh Storage",
        city: "Nanjing",
        region: "Jiangsu",
        distance: "720 km",
        cost: "¥3.5 - ¥7 / quintal / day",
        capacity: "55,000 tons",
        contact: "+86 25 000 0655",
        hours: "6 AM - 10 PM",
        rating: 4.4,
    },
];
