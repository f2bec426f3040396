//! Kafka topic shapes
//!
//! Request inputs and decoded payloads of the Kafka topic endpoints.

use crate::aiven::envelope::{nullable, ApiError};
use serde::{Deserialize, Serialize};

pub const CLEANUP_POLICY_DELETE: &str = "delete";
pub const CLEANUP_POLICY_COMPACT: &str = "compact";

pub const DEFAULT_PARTITIONS: i32 = 1;
pub const DEFAULT_REPLICATION: i32 = 3;
pub const DEFAULT_RETENTION_HOURS: i32 = 36;

/// Topic summary as returned by the service listing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Topic {
    pub cleanup_policy: String,
    pub partitions: i32,
    pub replication: i32,
    pub retention_hours: i32,
    pub state: String,
    pub topic_name: String,
}

/// Committed offset of one consumer group on a partition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsumerGroupInfo {
    pub group_name: String,
    pub offset: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartitionInfo {
    #[serde(deserialize_with = "nullable")]
    pub consumer_groups: Vec<ConsumerGroupInfo>,
    pub earliest_offset: i64,
    #[serde(rename = "isr")]
    pub in_sync_replicas: i32,
    pub latest_offset: i64,
    pub partition: i32,
    pub size: i64,
}

/// Full topic metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopicInfo {
    pub cleanup_policy: String,
    pub min_insync_replicas: i32,
    #[serde(deserialize_with = "nullable")]
    pub partitions: Vec<PartitionInfo>,
    pub replication: i32,
    pub retention_bytes: i64,
    pub retention_hours: i32,
    pub state: String,
    pub topic_name: String,
}

/// Raw response of the topic info endpoint, errors included
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopicInfoResponse {
    #[serde(deserialize_with = "nullable")]
    pub errors: Vec<ApiError>,
    #[serde(deserialize_with = "nullable")]
    pub message: String,
    #[serde(deserialize_with = "nullable")]
    pub topic: TopicInfo,
}

/// Shape of `GET /project/{p}/service/{s}`; only the topics are kept
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ServiceResponse {
    #[serde(deserialize_with = "nullable")]
    pub service: ServiceTopics,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ServiceTopics {
    #[serde(deserialize_with = "nullable")]
    pub topics: Vec<Topic>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListTopicsRequest {
    pub project: String,
    pub service: String,
}

impl ListTopicsRequest {
    pub fn new(project: &str, service: &str) -> Self {
        Self {
            project: project.to_string(),
            service: service.to_string(),
        }
    }
}

/// Input of topic creation. Project and service only appear in the URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateTopicRequest {
    #[serde(skip)]
    pub project: String,
    #[serde(skip)]
    pub service: String,
    pub cleanup_policy: String,
    pub partitions: i32,
    pub replication: i32,
    pub retention_hours: i32,
    pub topic_name: String,
}

impl CreateTopicRequest {
    /// New request with the default cleanup policy, partitions, replication and retention
    pub fn new(project: &str, service: &str, topic_name: &str) -> Self {
        Self {
            project: project.to_string(),
            service: service.to_string(),
            cleanup_policy: CLEANUP_POLICY_DELETE.to_string(),
            partitions: DEFAULT_PARTITIONS,
            replication: DEFAULT_REPLICATION,
            retention_hours: DEFAULT_RETENTION_HOURS,
            topic_name: topic_name.to_string(),
        }
    }
}

/// Identifies one topic of one service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicRef {
    pub project: String,
    pub service: String,
    pub topic_name: String,
}

impl TopicRef {
    pub fn new(project: &str, service: &str, topic_name: &str) -> Self {
        Self {
            project: project.to_string(),
            service: service.to_string(),
            topic_name: topic_name.to_string(),
        }
    }
}

pub type DeleteTopicRequest = TopicRef;
pub type TopicInfoRequest = TopicRef;
