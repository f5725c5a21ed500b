//! Job Status Value Object
//!
//! `Pending -> Approved` is the only transition. Rejection deletes the row.

use derive_more::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum JobStatus {
    #[display("pending")]
    Pending,
    #[display("approved")]
    Approved,
}

impl JobStatus {
    /// `jobs.approved` カラムから復元
    pub fn from_approved(approved: bool) -> Self {
        if approved {
            JobStatus::Approved
        } else {
            JobStatus::Pending
        }
    }

    /// 公開一覧に表示されるのは承認済みのみ
    pub fn is_approved(&self) -> bool {
        matches!(self, JobStatus::Approved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_approved() {
        assert_eq!(JobStatus::from_approved(false), JobStatus::Pending);
        assert_eq!(JobStatus::from_approved(true), JobStatus::Approved);
        assert!(!JobStatus::Pending.is_approved());
        assert_eq!(JobStatus::Approved.to_string(), "approved");
    }
}
