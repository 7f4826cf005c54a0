use crate::core::VacancyRecord;

/// Turns a downloaded page into vacancy records.
///
/// Implementations must be pure: same markup in, same records out, no I/O.
pub trait Parser: Send + Sync {
    fn parse(&self, body: &str) -> Vec<VacancyRecord>;
}
