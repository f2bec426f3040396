//! Kafka Topics
//!
//! Topic listing, creation, deletion and inspection for a Kafka service.

use super::policy::{classify, TopicOperation};
use super::types::{
    CreateTopicRequest, DeleteTopicRequest, ListTopicsRequest, ServiceResponse, Topic,
    TopicInfoRequest, TopicInfoResponse,
};
use crate::aiven::client::AivenClient;
use crate::aiven::envelope::Envelope;
use anyhow::{Context, Result};

/// Kafka API bound to an authenticated session
#[derive(Clone, Copy)]
pub struct KafkaApi<'a> {
    client: &'a AivenClient,
}

impl<'a> KafkaApi<'a> {
    pub fn new(client: &'a AivenClient) -> Self {
        Self { client }
    }

    fn service_url(&self, project: &str, service: &str) -> String {
        self.client
            .console_url(&["project", project, "service", service])
    }

    fn topics_url(&self, project: &str, service: &str) -> String {
        self.client
            .console_url(&["project", project, "service", service, "topic"])
    }

    fn topic_url(&self, project: &str, service: &str, topic: &str) -> String {
        self.client
            .console_url(&["project", project, "service", service, "topic", topic])
    }

    /// List all topics of a service, in the order the API returns them
    pub async fn list_topics(&self, input: &ListTopicsRequest) -> Result<Vec<Topic>> {
        let url = self.service_url(&input.project, &input.service);
        let out: ServiceResponse = self.client.get(&url).await.with_context(|| {
            format!(
                "unable to retrieve topics for project:service, {}:{}",
                input.project, input.service
            )
        })?;

        Ok(out.service.topics)
    }

    /// Create a topic. Succeeds when the topic already exists.
    pub async fn create_topic(&self, input: &CreateTopicRequest) -> Result<()> {
        let url = self.topics_url(&input.project, &input.service);
        let out: Envelope = self.client.post(&url, input).await.with_context(|| {
            format!(
                "unable to create topic, {}, for project:service, {}:{}",
                input.topic_name, input.project, input.service
            )
        })?;

        classify(TopicOperation::Create, &out)?;
        Ok(())
    }

    /// Delete a topic. Succeeds when the topic does not exist.
    pub async fn delete_topic(&self, input: &DeleteTopicRequest) -> Result<()> {
        let url = self.topic_url(&input.project, &input.service, &input.topic_name);
        let out: Envelope = self
            .client
            .delete(&url, None::<&()>)
            .await
            .with_context(|| {
                format!(
                    "unable to delete topic, {}, for project:service, {}:{}",
                    input.topic_name, input.project, input.service
                )
            })?;

        classify(TopicOperation::Delete, &out)?;
        Ok(())
    }

    /// Fetch topic metadata.
    ///
    /// The decoded envelope is returned as is; errors reported by the API
    /// are left in `errors` for the caller to inspect.
    pub async fn topic_info(&self, input: &TopicInfoRequest) -> Result<TopicInfoResponse> {
        let url = self.topic_url(&input.project, &input.service, &input.topic_name);
        self.client.get(&url).await.with_context(|| {
            format!(
                "unable to retrieve topic info for topic, {}, for project:service, {}:{}",
                input.topic_name, input.project, input.service
            )
        })
    }
}
