use super::{ClimateProfile, MoistureEntry, RainfallEntry, TemperatureEntry};

const fn rain(region: &'static str, rainfall_mm: u32, optimal_mm: u32) -> RainfallEntry {
    RainfallEntry {
        region,
        rainfall_mm,
        optimal_mm,
    }
}

const fn temp(month: &'static str, day_c: i32, night_c: i32) -> TemperatureEntry {
    TemperatureEntry {
        month,
        day_c,
        night_c,
    }
}

const fn moist(week: &'static str, moisture_percent: u32) -> MoistureEntry {
    MoistureEntry {
        week,
        moisture_percent,
    }
}

pub(super) static INDIA: ClimateProfile = ClimateProfile {
    rainfall: &[
        rain("North", 120, 100),
        rain("South", 160, 140),
        rain("East", 180, 150),
        rain("West", 70, 90),
        rain("Central", 110, 105),
    ],
    temperature: &[
        temp("Oct", 31, 20),
        temp("Nov", 28, 14),
        temp("Dec", 25, 10),
        temp("Jan", 24, 9),
        temp("Feb", 27, 12),
        temp("Mar", 33, 17),
    ],
    moisture: &[
        moist("W1", 70),
        moist("W2", 66),
        moist("W3", 62),
        moist("W4", 58),
        moist("W5", 55),
        moist("W6", 51),
        moist("W7", 48),
        moist("W8", 45),
    ],
};

pub(super) static UNITED_STATES: ClimateProfile = ClimateProfile {
    rainfall: &[
        rain("Northern CA", 180, 150),
        rain("Central CA", 120, 130),
        rain("Southern CA", 75, 100),
        rain("Coastal", 145, 140),
        rain("Valley", 95, 110),
    ],
    temperature: &[
        temp("Oct", 22, 12),
        temp("Nov", 18, 8),
        temp("Dec", 14, 4),
        temp("Jan", 12, 2),
        temp("Feb", 15, 5),
        temp("Mar", 19, 9),
    ],
    moisture: &[
        moist("W1", 65),
        moist("W2", 72),
        moist("W3", 68),
        moist("W4", 58),
        moist("W5", 52),
        moist("W6", 48),
        moist("W7", 45),
        moist("W8", 42),
    ],
};

pub(super) static CHINA: ClimateProfile = ClimateProfile {
    rainfall: &[
        rain("Northeast", 90, 100),
        rain("North China Plain", 70, 95),
        rain("Yangtze Valley", 190, 160),
        rain("South", 210, 170),
        rain("Sichuan Basin", 140, 130),
    ],
    temperature: &[
        temp("Oct", 20, 11),
        temp("Nov", 13, 5),
        temp("Dec", 6, -2),
        temp("Jan", 4, -4),
        temp("Feb", 7, -1),
        temp("Mar", 13, 4),
    ],
    moisture: &[
        moist("W1", 60),
        moist("W2", 57),
        moist("W3", 55),
        moist("W4", 52),
        moist("W5", 50),
        moist("W6", 53),
        moist("W7", 56),
        moist("W8", 58),
    ],
};
