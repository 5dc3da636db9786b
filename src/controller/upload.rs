// file: src/controller/upload.rs
// description: submits new document text and reports the gateway's answer

use crate::display::Notifier;
use crate::gateway::{RequestOptions, SearchGateway};
use crate::models::{UploadPayload, UploadReceipt};
use crate::utils::{OperationTimer, Validator};
use tracing::{debug, info, warn};

pub const EMPTY_DOCUMENT_MESSAGE: &str = "Please enter document before submitting.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    Rejected,
    Failed,
    Uploaded(UploadReceipt),
}

pub struct UploadController<'a, G> {
    gateway: &'a G,
    notifier: &'a dyn Notifier,
    options: RequestOptions,
}

impl<'a, G: SearchGateway> UploadController<'a, G> {
    pub fn new(gateway: &'a G, notifier: &'a dyn Notifier) -> Self {
        Self {
            gateway,
            notifier,
            options: RequestOptions::default(),
        }
    }

    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    /// Uploads `text` unchanged. The user is notified exactly once, with the
    /// validation message, the gateway's payload, or the failure payload.
    pub async fn upload_document(&self, text: &str) -> UploadOutcome {
        if let Err(err) = Validator::validate_not_blank(text, EMPTY_DOCUMENT_MESSAGE) {
            self.notifier.alert(&err.payload());
            return UploadOutcome::Rejected;
        }

        let timer = OperationTimer::new("upload");
        info!("Uploading document ({} bytes)", text.len());

        let result = self
            .gateway
            .upload(&UploadPayload::new(text), &self.options)
            .await;
        timer.finish();

        match result {
            Ok(receipt) => {
                debug!("Upload response: {:?}", receipt);
                self.notifier.alert(&receipt.location);
                UploadOutcome::Uploaded(receipt)
            }
            Err(err) => {
                warn!("Upload failed: {}", err);
                self.notifier.alert(&err.payload());
                UploadOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{QueryController, QueryOutcome};
    use crate::controller::test_support::{Call, FakeGateway};
    use crate::display::{CollectingResultList, RecordingNotifier};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_blank_document_is_rejected() {
        let gateway = FakeGateway::new();
        let notifier = RecordingNotifier::new();
        let controller = UploadController::new(&gateway, &notifier);

        let outcome = controller.upload_document(" \n\t ").await;

        assert_eq!(outcome, UploadOutcome::Rejected);
        assert!(gateway.calls().is_empty());
        assert_eq!(notifier.alerts(), vec![EMPTY_DOCUMENT_MESSAGE]);
    }

    #[tokio::test]
    async fn test_success_alerts_with_payload() {
        let gateway = FakeGateway::new().upload_replies("\"ok\"");
        let notifier = RecordingNotifier::new();
        let controller = UploadController::new(&gateway, &notifier);

        let outcome = controller.upload_document("report").await;

        assert_eq!(
            outcome,
            UploadOutcome::Uploaded(UploadReceipt {
                location: "ok".to_string()
            })
        );
        assert_eq!(gateway.calls(), vec![Call::Upload("report".to_string())]);
        assert_eq!(notifier.alerts(), vec!["ok"]);
    }

    #[tokio::test]
    async fn test_failure_alerts_with_error_payload() {
        let gateway = FakeGateway::new().failing_upload("Internal server error");
        let notifier = RecordingNotifier::new();
        let controller = UploadController::new(&gateway, &notifier);

        let outcome = controller.upload_document("report").await;

        assert_eq!(outcome, UploadOutcome::Failed);
        assert_eq!(notifier.alerts(), vec!["Internal server error"]);
    }

    #[tokio::test]
    async fn test_content_is_sent_verbatim() {
        let gateway = FakeGateway::new();
        let notifier = RecordingNotifier::new();
        let controller = UploadController::new(&gateway, &notifier)
            .with_options(RequestOptions::new().with_query_param("source", "cli"));

        controller.upload_document("  line one\nline two  ").await;

        assert_eq!(
            gateway.calls(),
            vec![Call::Upload("  line one\nline two  ".to_string())]
        );
        assert_eq!(
            gateway.last_options(),
            Some(RequestOptions::new().with_query_param("source", "cli"))
        );
    }

    #[tokio::test]
    async fn test_uploaded_text_comes_back_through_query() {
        let gateway = FakeGateway::new();
        let list = CollectingResultList::new();
        let notifier = RecordingNotifier::new();

        let uploaded = UploadController::new(&gateway, &notifier)
            .upload_document("report")
            .await;
        assert!(matches!(uploaded, UploadOutcome::Uploaded(_)));

        let outcome = QueryController::new(&gateway, &list, &notifier)
            .run_query("quarterly report")
            .await;

        assert!(matches!(outcome, QueryOutcome::Completed(_)));
        assert_eq!(list.texts(), vec!["report"]);
        assert_eq!(notifier.alerts(), vec!["ok"]);
    }
}
