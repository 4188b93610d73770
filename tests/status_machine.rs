use axum_ewaste_api::models::ApprovalStatus;

#[test]
fn parse_accepts_known_statuses_only() {
    assert_eq!(ApprovalStatus::parse("pending"), Some(ApprovalStatus::Pending));
    assert_eq!(ApprovalStatus::parse("approved"), Some(ApprovalStatus::Approved));
    assert_eq!(ApprovalStatus::parse("rejected"), Some(ApprovalStatus::Rejected));
    assert_eq!(ApprovalStatus::parse("trashed"), Some(ApprovalStatus::Trashed));
    assert_eq!(ApprovalStatus::parse("paid"), None);
    assert_eq!(ApprovalStatus::parse("Approved"), None);
    assert_eq!(ApprovalStatus::parse(""), None);
}

#[test]
fn any_status_can_be_trashed() {
    for status in [
        ApprovalStatus::Pending,
        ApprovalStatus::Approved,
        ApprovalStatus::Rejected,
        ApprovalStatus::Trashed,
    ] {
        assert!(status.can_transition_to(ApprovalStatus::Trashed));
    }
}

#[test]
fn pending_moves_to_approved_or_rejected() {
    assert!(ApprovalStatus::Pending.can_transition_to(ApprovalStatus::Approved));
    assert!(ApprovalStatus::Pending.can_transition_to(ApprovalStatus::Rejected));
}

#[test]
fn approved_and_rejected_are_reassignable() {
    assert!(ApprovalStatus::Approved.can_transition_to(ApprovalStatus::Rejected));
    assert!(ApprovalStatus::Rejected.can_transition_to(ApprovalStatus::Approved));
    assert!(ApprovalStatus::Approved.can_transition_to(ApprovalStatus::Approved));
}

#[test]
fn trashed_only_restores_to_pending() {
    assert!(ApprovalStatus::Trashed.can_transition_to(ApprovalStatus::Pending));
    assert!(!ApprovalStatus::Trashed.can_transition_to(ApprovalStatus::Approved));
    assert!(!ApprovalStatus::Trashed.can_transition_to(ApprovalStatus::Rejected));
}

#[test]
fn nothing_else_reaches_pending() {
    assert!(!ApprovalStatus::Approved.can_transition_to(ApprovalStatus::Pending));
    assert!(!ApprovalStatus::Rejected.can_transition_to(ApprovalStatus::Pending));
}
