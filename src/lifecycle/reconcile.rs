//! Binding upload results to the media references of a draft

use crate::types::{MediaReference, Submission, UploadResult};
use std::collections::HashSet;
use tracing::warn;

/// How upload results were matched to media references
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileMode {
    /// By correlation token echoed back by the upload backend
    Keyed,
    /// By position: result 0 is the main submission, result `i` is reference `i - 1`
    Positional,
}

/// Summary of a reconciliation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Matching strategy used
    pub mode: ReconcileMode,
    /// Results bound to a media reference
    pub bound: usize,
    /// Results with no matching media reference
    pub dropped: usize,
}

/// Content URL for a storage-provider file id
pub fn storage_url(prefix: &str, id: &str) -> String {
    format!("{prefix}{}", urlencoding::encode(id))
}

fn bind(media: &mut MediaReference, result: &UploadResult, prefix: &str) {
    media.content_storage_url = Some(storage_url(prefix, &result.id));
    media.image_url = Some(result.image_url.clone());
}

/// Write upload results into the draft's media references
///
/// Keyed matching is used when every result carries a token and the draft has
/// tokens to match against. Otherwise results are bound by position, which
/// relies on the files having been uploaded in the order main submission,
/// then additional references. Results without a slot are dropped; slots
/// without a result keep their URLs unset.
pub fn reconcile_uploads(
    draft: &mut Submission,
    results: &[UploadResult],
    storage_url_prefix: &str,
) -> ReconcileReport {
    let keyed = !results.is_empty()
        && results.iter().all(|r| r.token.is_some())
        && draft.media().any(|m| m.upload_token.is_some());

    let report = if keyed {
        reconcile_keyed(draft, results, storage_url_prefix)
    } else {
        reconcile_positional(draft, results, storage_url_prefix)
    };

    if report.dropped > 0 {
        warn!(
            mode = ?report.mode,
            dropped = report.dropped,
            "upload results without a matching media reference were ignored"
        );
    }

    report
}

fn reconcile_keyed(
    draft: &mut Submission,
    results: &[UploadResult],
    prefix: &str,
) -> ReconcileReport {
    let mut bound = 0;
    let mut seen: HashSet<&str> = HashSet::new();
    for result in results {
        // First result per token wins; repeats count as dropped
        if let Some(token) = result.token.as_deref() {
            if !seen.insert(token) {
                continue;
            }
        }
        let target = draft
            .media_mut()
            .find(|m| m.upload_token.is_some() && m.upload_token == result.token);
        if let Some(media) = target {
            bind(media, result, prefix);
            bound += 1;
        }
    }

    ReconcileReport {
        mode: ReconcileMode::Keyed,
        bound,
        dropped: results.len() - bound,
    }
}

fn reconcile_positional(
    draft: &mut Submission,
    results: &[UploadResult],
    prefix: &str,
) -> ReconcileReport {
    let mut bound = 0;
    for (media, result) in draft.media_mut().zip(results) {
        bind(media, result, prefix);
        bound += 1;
    }

    ReconcileReport {
        mode: ReconcileMode::Positional,
        bound,
        dropped: results.len() - bound,
    }
}
