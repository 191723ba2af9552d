// Industry catalog: verticals, their leak types and the sensors watching them
use super::sensor::SensorType;

#[derive(Debug, Clone, PartialEq)]
pub struct LeakType {
    pub title: &'static str,
    pub description: &'static str,
    pub sensors: &'static [&'static str],
}

impl LeakType {
    pub fn slug(&self) -> String {
        slugify(self.title)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Industry {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub leak_types: &'static [LeakType],
}

impl Industry {
    pub fn find_leak_type(&self, slug: &str) -> Option<&'static LeakType> {
        self.leak_types.iter().find(|lt| lt.slug() == slug)
    }
}

/// Lowercase the title and collapse each whitespace run to a single `-`.
pub fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

pub fn find_industry(slug: &str) -> Option<&'static Industry> {
    INDUSTRIES.iter().find(|i| i.slug == slug)
}

pub fn usage_description(sensor: &SensorType, industry: &str) -> String {
    match sensor {
        SensorType::Temperature => format!(
            "Monitors heat levels in {} equipment to prevent overheating and ensure optimal operation.",
            industry
        ),
        SensorType::Pressure => format!(
            "Measures fluid or gas pressure in {} pipelines and vessels to detect leaks and prevent failures.",
            industry
        ),
        SensorType::Acoustic => format!(
            "Detects sound patterns in {} systems to identify leaks, valve issues, or mechanical problems.",
            industry
        ),
        SensorType::Vibration => format!(
            "Monitors vibration levels in {} machinery to detect imbalance, misalignment, or bearing failures.",
            industry
        ),
        SensorType::Mq135 => format!(
            "Detects air quality and gas leaks in {} environments to ensure safety and compliance.",
            industry
        ),
        SensorType::IrFlame => format!(
            "Identifies flames or heat sources in {} operations to prevent fires and ensure safety protocols.",
            industry
        ),
        SensorType::Fuel | SensorType::FuelCable | SensorType::FuelOilSensingCable => format!(
            "Detects fuel or oil leaks in {} storage and transport systems to prevent environmental damage.",
            industry
        ),
        SensorType::WaterInOil => format!(
            "Monitors water contamination in oil systems used in {} to maintain equipment integrity.",
            industry
        ),
        SensorType::CapacitiveFuel | SensorType::UltrasonicFuelLevel => format!(
            "Measures fuel levels in {} storage tanks and equipment to prevent shortages and detect leaks.",
            industry
        ),
        SensorType::SoilMoisture => format!(
            "Monitors ground moisture levels around {} installations to detect underground leaks.",
            industry
        ),
        SensorType::Humidity => format!(
            "Measures atmospheric moisture in {} environments to ensure optimal operating conditions.",
            industry
        ),
        _ => format!(
            "Monitors operating conditions in {} equipment to support leak detection.",
            industry
        ),
    }
}

pub static INDUSTRIES: &[Industry] = &[
    Industry {
        slug: "oil-gas",
        title: "Oil & Gas Industry",
        description: "Monitor and detect leaks across oil and gas infrastructure",
        leak_types: &[
            LeakType {
                title: "Pipeline Corrosion",
                description: "Leaks caused by corrosion in pipelines",
                sensors: &["Pressure Sensor", "Temperature Sensor"],
            },
            LeakType {
                title: "Faulty Valves",
                description: "Leaks resulting from valve failures or improper sealing",
                sensors: &["Acoustic Sensor", "Vibration Sensor", "Pressure Sensor"],
            },
            LeakType {
                title: "Pressure Surges",
                description: "Leaks caused by sudden pressure changes in the system",
                sensors: &["Pressure Sensor", "Vibration Sensor"],
            },
            LeakType {
                title: "Blowouts",
                description: "Catastrophic leaks from well control failures",
                sensors: &["MQ-135 Sensor", "IR Flame Sensor", "Acoustic Sensor"],
            },
        ],
    },
    Industry {
        slug: "transportation",
        title: "Transportation & Logistics",
        description: "Monitor and detect leaks across transportation and logistics operations",
        leak_types: &[
            LeakType {
                title: "Tanker Truck Rollovers",
                description: "Leaks resulting from tanker truck accidents",
                sensors: &["Vibration Sensor", "Fuel Sensor"],
            },
            LeakType {
                title: "Railcar Valve/Seal Failures",
                description: "Leaks from failed valves or seals in rail transport",
                sensors: &["MQ-135 Sensor", "Acoustic Sensor", "Vibration Sensor"],
            },
            LeakType {
                title: "Ship Leakages",
                description: "Leaks from maritime vessels and tankers",
                sensors: &["Fuel & Oil Sensing Cable", "Water-in-Oil Sensor"],
            },
        ],
    },
    Industry {
        slug: "agriculture",
        title: "Agriculture (AgriTech)",
        description: "Monitor and detect leaks across agricultural operations",
        leak_types: &[
            LeakType {
                title: "Fuel Tank Leaks",
                description: "Leaks from fuel storage tanks in agricultural settings",
                sensors: &["Fuel & Oil Cable", "MQ-135 Sensor", "Capacitive Fuel Sensor"],
            },
            LeakType {
                title: "Pipeline Leaks",
                description: "Leaks in irrigation or fuel distribution pipelines",
                sensors: &["Pressure Sensor", "Acoustic Sensor", "MQ-135 Sensor"],
            },
            LeakType {
                title: "Undetected Storage Leaks",
                description: "Slow leaks in storage facilities that go unnoticed",
                sensors: &["Temperature Sensor", "Humidity Sensor", "MQ-135 Sensor"],
            },
        ],
    },
    Industry {
        slug: "aerospace",
        title: "Aerospace & Defense",
        description: "Monitor and detect leaks across aerospace and defense operations",
        leak_types: &[
            LeakType {
                title: "Fuel/Hydraulic Leaks",
                description: "Leaks in aircraft fuel or hydraulic systems",
                sensors: &["Fuel Cable", "MQ-135 Sensor", "Vibration Sensor"],
            },
            LeakType {
                title: "Military Base Tank Leaks",
                description: "Leaks from fuel storage tanks at military installations",
                sensors: &["MQ-135 Sensor", "Acoustic Sensor", "Soil Moisture Sensor"],
            },
            LeakType {
                title: "Jet Fuel Leakages",
                description: "Leaks specific to jet fuel storage and distribution",
                sensors: &["IR Flame Sensor", "MQ-135 Sensor", "Temperature Sensor"],
            },
        ],
    },
    Industry {
        slug: "construction",
        title: "Construction",
        description: "Monitor and detect leaks across construction sites and equipment",
        leak_types: &[
            LeakType {
                title: "Machinery Fuel Leaks",
                description: "Leaks from construction equipment and machinery",
                sensors: &["Fuel Cable", "Vibration Sensor"],
            },
            LeakType {
                title: "Storage Tank Ruptures",
                description: "Leaks from damaged storage tanks at construction sites",
                sensors: &["Pressure Sensor", "Temperature Sensor", "MQ-135 Sensor"],
            },
            LeakType {
                title: "Fuel Theft",
                description: "Unauthorized removal of fuel from construction equipment",
                sensors: &["Ultrasonic Fuel Level Sensor", "Vibration Sensor"],
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Pipeline Corrosion"), "pipeline-corrosion");
        assert_eq!(
            slugify("Railcar Valve/Seal Failures"),
            "railcar-valve/seal-failures"
        );
        assert_eq!(slugify("Fuel  & Oil"), "fuel-&-oil");
    }

    #[test]
    fn test_every_leak_type_resolves_by_slug() {
        for industry in INDUSTRIES {
            assert_eq!(find_industry(industry.slug), Some(industry));
            for leak_type in industry.leak_types {
                assert_eq!(industry.find_leak_type(&leak_type.slug()), Some(leak_type));
                assert!(!leak_type.sensors.is_empty());
            }
        }
    }

    #[test]
    fn test_unknown_slugs() {
        assert!(find_industry("mining").is_none());
        let oil_gas = find_industry("oil-gas").unwrap();
        assert!(oil_gas.find_leak_type("tanker-truck-rollovers").is_none());
    }

    #[test]
    fn test_usage_description_mentions_industry() {
        let text = usage_description(&SensorType::Pressure, "Construction");
        assert!(text.contains("Construction pipelines"));
    }
}
