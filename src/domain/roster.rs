//! Static roster shown on the User and Admin tabs.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompanySummary {
    pub name: &'static str,
    pub last_communication: &'static str,
}

pub const COMPANIES: [CompanySummary; 3] = [
    CompanySummary { name: "Company A", last_communication: "Email (2 days ago)" },
    CompanySummary { name: "Company B", last_communication: "Email (2 days ago)" },
    CompanySummary { name: "Company C", last_communication: "Email (2 days ago)" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeSeverity {
    Overdue,
    DueToday,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub severity: NoticeSeverity,
    pub text: &'static str,
}

pub const NOTIFICATIONS: [Notice; 2] = [
    Notice { severity: NoticeSeverity::Overdue, text: "Overdue: Company A (5 days)" },
    Notice { severity: NoticeSeverity::DueToday, text: "Due Today: Company B" },
];

pub const COMMUNICATION_METHODS: [&str; 5] = [
    "LinkedIn Post",
    "LinkedIn Message",
    "Email",
    "Phone Call",
    "Other",
];
