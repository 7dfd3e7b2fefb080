use smecore::{
    entity::Listing,
    notification::Notification,
    payment::Payment,
    report::Report,
    student::Student,
    teacher::Teacher,
};

pub fn make_student(id: i64) -> Student {
    Student {
        id,
        first_name: format!("Given{}", id),
        last_name: format!("Family{}", id),
        email: format!("student{}@example.edu", id),
        phone: None,
        class_name: "5A".to_string(),
        status: "active".to_string(),
        guardian: None,
        created_ts: 1_700_000_000 + id,
    }
}

pub fn make_teacher(id: i64) -> Teacher {
    Teacher {
        id,
        first_name: format!("Given{}", id),
        last_name: format!("Family{}", id),
        email: format!("teacher{}@example.edu", id),
        phone: None,
        subject: "Mathematics".to_string(),
        status: "active".to_string(),
        created_ts: 1_700_000_000 + id,
    }
}

pub fn make_notification(id: i64, read: bool) -> Notification {
    Notification {
        id,
        title: format!("Notice {}", id),
        message: "Classes resume on Monday.".to_string(),
        recipient_id: None,
        read,
        created_ts: 1_700_000_000 + id,
    }
}

pub fn make_payment(id: i64, student_id: i64) -> Payment {
    Payment {
        id,
        student_id,
        amount_cents: 125_00,
        status: "pending".to_string(),
        reference: Some(format!("INV-{:04}", id)),
        paid_ts: None,
        created_ts: 1_700_000_000 + id,
    }
}

pub fn make_report(id: i64) -> Report {
    Report {
        id,
        title: format!("Term report {}", id),
        category: "attendance".to_string(),
        summary: None,
        status: "ready".to_string(),
        created_ts: 1_700_000_000 + id,
    }
}

/// Listing whose total matches the number of records carried.
pub fn make_listing<E>(items: Vec<E>) -> Listing<E> {
    let total = items.len() as i64;
    Listing { items, total }
}

/// Listing for a single page out of a larger server-side total.
pub fn make_paged_listing<E>(items: Vec<E>, total: i64) -> Listing<E> {
    Listing { items, total }
}
