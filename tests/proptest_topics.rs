//! Property-based tests using proptest
//!
//! These tests verify error classification, the create-topic request body,
//! topic listing decode order and URL construction with randomized inputs.

use aiven_client::aiven::client::{AivenClient, Endpoints};
use aiven_client::aiven::envelope::{ApiError, Envelope};
use aiven_client::aiven::error::AivenError;
use aiven_client::kafka::policy::classify;
use aiven_client::kafka::types::{ServiceResponse, CLEANUP_POLICY_COMPACT, CLEANUP_POLICY_DELETE};
use aiven_client::kafka::{is_acceptable, CreateTopicRequest, Topic, TopicOperation};
use proptest::prelude::*;
use serde_json::json;

/// Generate arbitrary topic summaries
fn arb_topic() -> impl Strategy<Value = Topic> {
    (
        "[a-z][a-z0-9._-]{0,62}",
        prop_oneof![Just(CLEANUP_POLICY_DELETE), Just(CLEANUP_POLICY_COMPACT)],
        1..64i32,
        1..5i32,
        1..10_000i32,
        prop_oneof!["ACTIVE", "CONFIGURING", "DELETING"],
    )
        .prop_map(|(name, policy, partitions, replication, retention, state)| Topic {
            cleanup_policy: policy.to_string(),
            partitions,
            replication,
            retention_hours: retention,
            state,
            topic_name: name,
        })
}

fn arb_error(status: impl Strategy<Value = u16>) -> impl Strategy<Value = ApiError> {
    (status, ".{0,40}").prop_map(|(status, message)| ApiError {
        message,
        more_info: String::new(),
        status,
    })
}

fn arb_operation() -> impl Strategy<Value = TopicOperation> {
    prop_oneof![Just(TopicOperation::Create), Just(TopicOperation::Delete)]
}

proptest! {
    /// Any status other than the acceptable one surfaces its message verbatim
    #[test]
    fn unacceptable_status_surfaces_message(
        operation in arb_operation(),
        first in arb_error(100u16..600),
        rest in prop::collection::vec(arb_error(100u16..600), 0..4),
    ) {
        prop_assume!(!is_acceptable(first.status, operation));

        let mut errors = vec![first.clone()];
        errors.extend(rest);
        let envelope = Envelope { errors, message: String::new() };

        match classify(operation, &envelope) {
            Err(AivenError::Business(message)) => {
                prop_assert_eq!(message, first.message);
            }
            other => {
                prop_assert!(false, "unexpected outcome: {:?}", other);
            }
        }
    }

    /// A leading acceptable status always means success
    #[test]
    fn acceptable_status_is_success(
        operation in arb_operation(),
        message in ".{0,40}",
        rest in prop::collection::vec(arb_error(100u16..600), 0..4),
    ) {
        let mut errors = vec![ApiError {
            message,
            more_info: String::new(),
            status: operation.acceptable_status().as_u16(),
        }];
        errors.extend(rest);
        let envelope = Envelope { errors, message: String::new() };

        prop_assert!(classify(operation, &envelope).is_ok());
    }

    /// The create body carries exactly the topic settings
    #[test]
    fn create_body_has_exact_keys(
        project in "[a-z0-9-]{1,20}",
        service in "[a-z0-9-]{1,20}",
        topic in arb_topic(),
    ) {
        let request = CreateTopicRequest {
            cleanup_policy: topic.cleanup_policy.clone(),
            partitions: topic.partitions,
            replication: topic.replication,
            retention_hours: topic.retention_hours,
            ..CreateTopicRequest::new(&project, &service, &topic.topic_name)
        };

        let body = serde_json::to_value(&request).unwrap();
        let mut keys: Vec<_> = body.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        prop_assert_eq!(
            keys,
            vec!["cleanup_policy", "partitions", "replication", "retention_hours", "topic_name"]
        );
        prop_assert_eq!(&body["topic_name"], &json!(topic.topic_name));
        prop_assert_eq!(&body["partitions"], &json!(topic.partitions));
    }

    /// Decoding a service listing keeps every topic in the order received
    #[test]
    fn listing_preserves_order(topics in prop::collection::vec(arb_topic(), 0..50)) {
        let body = json!({"service": {"service_name": "svc", "topics": &topics}});
        let decoded: ServiceResponse = serde_json::from_value(body).unwrap();
        prop_assert_eq!(decoded.service.topics, topics);
    }

    /// Plain identifiers appear in the URL unchanged
    #[test]
    fn console_url_keeps_plain_identifiers(
        project in "[a-z0-9-]{1,30}",
        service in "[a-z0-9-]{1,30}",
        topic in "[a-zA-Z0-9._-]{1,60}",
    ) {
        let client = AivenClient::new(Endpoints::default()).unwrap();
        let url = client.console_url(&["project", &project, "service", &service, "topic", &topic]);
        prop_assert_eq!(
            url,
            format!(
                "https://console.aiven.io/v1beta/project/{}/service/{}/topic/{}",
                project, service, topic
            )
        );
    }
}
