/// n8n hashes user passwords with 10 rounds.
pub const DEFAULT_COST: u32 = 10;
pub const MIN_COST: u32 = 4;
pub const MAX_COST: u32 = 31;

pub const REPORT_LABEL: &str = "Generated hash for n8n:";
