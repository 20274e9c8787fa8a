//! Test data factories for portal types
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use submission_portal::service::{UploadFile, UploadForm};
use submission_portal::types::{
    Issue, IssueStatus, MediaReference, MediaType, Submission, SubmissionStatus, UploadResult,
};

/// Create a stored submission with default values
pub fn make_submission(id: &str, title: &str) -> Submission {
    Submission {
        id: Some(id.to_string()),
        title: title.to_string(),
        author: "Test Author".to_string(),
        issue: "Spring 2024".to_string(),
        status: SubmissionStatus::Pending,
        main_submission: MediaReference {
            image_url: Some(format!("https://img.example.com/{id}.jpg")),
            content_storage_url: Some(format!("https://drive.example.com/{id}")),
            ..MediaReference::new(MediaType::Image, "main")
        },
        additional_references: vec![],
    }
}

/// Create a stored submission with a status and issue
pub fn make_submission_with(
    id: &str,
    title: &str,
    status: SubmissionStatus,
    issue: &str,
) -> Submission {
    Submission {
        status,
        issue: issue.to_string(),
        ..make_submission(id, title)
    }
}

/// Create an unsaved draft with `references` additional references
pub fn make_draft(title: &str, references: usize) -> Submission {
    Submission {
        id: None,
        title: title.to_string(),
        author: "Test Author".to_string(),
        issue: "Spring 2024".to_string(),
        status: SubmissionStatus::Pending,
        main_submission: MediaReference::new(MediaType::Image, "main"),
        additional_references: (0..references)
            .map(|i| MediaReference::new(MediaType::Writing, format!("reference {i}")))
            .collect(),
    }
}

/// Create an upload form for `draft`, attaching one file per media reference
pub fn make_form(user_id: &str, draft: &mut Submission) -> UploadForm {
    let mut form = UploadForm::new(user_id)
        .field("title", draft.title.as_str())
        .field("author", draft.author.as_str())
        .field("issue", draft.issue.as_str());
    for (i, media) in draft.media_mut().enumerate() {
        let file = UploadFile::new(format!("file{i}.jpg"), "image/jpeg", vec![0xFF, 0xD8, i as u8]);
        form.attach(file, media);
    }
    form
}

/// Create an upload result without a correlation token
pub fn make_upload_result(id: &str) -> UploadResult {
    UploadResult {
        id: id.to_string(),
        image_url: format!("https://img.example.com/{id}.jpg"),
        token: None,
    }
}

/// Create an upload result echoing a correlation token
pub fn make_upload_result_keyed(id: &str, token: &str) -> UploadResult {
    UploadResult {
        token: Some(token.to_string()),
        ..make_upload_result(id)
    }
}

/// Create an issue
pub fn make_issue(title: &str, status: IssueStatus) -> Issue {
    Issue {
        status,
        title: title.to_string(),
    }
}
