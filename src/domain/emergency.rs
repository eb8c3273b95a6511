use serde::Serialize;

/// A phone line listed on the SOS page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmergencyContact {
    pub service: &'static str,
    pub number: &'static str,
    pub description: &'static str,
}

/// Lines shown to every user, in display order.
pub const EMERGENCY_CONTACTS: &[EmergencyContact] = &[
    EmergencyContact {
        service: "Emergency Services",
        number: "911",
        description: "Police, Fire, Ambulance",
    },
    EmergencyContact {
        service: "Poison Control",
        number: "1-800-222-1222",
        description: "Poison emergency assistance",
    },
    EmergencyContact {
        service: "Mental Health Crisis",
        number: "988",
        description: "24/7 mental health support",
    },
    EmergencyContact {
        service: "Svasta Emergency",
        number: "1-800-SVASTA",
        description: "Healthcare emergency line",
    },
];
