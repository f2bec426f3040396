//! Kafka topic management
//!
//! Named operations over an authenticated [`AivenClient`](crate::aiven::client::AivenClient):
//!
//! | Operation      | Method | Path                                      |
//! |----------------|--------|-------------------------------------------|
//! | `list_topics`  | GET    | `/project/{p}/service/{s}`                |
//! | `create_topic` | POST   | `/project/{p}/service/{s}/topic`          |
//! | `delete_topic` | DELETE | `/project/{p}/service/{s}/topic/{name}`   |
//! | `topic_info`   | GET    | `/project/{p}/service/{s}/topic/{name}`   |

pub mod policy;
pub mod topics;
pub mod types;

pub use policy::{is_acceptable, TopicOperation};
pub use topics::KafkaApi;
pub use types::{
    ConsumerGroupInfo, CreateTopicRequest, DeleteTopicRequest, ListTopicsRequest, PartitionInfo,
    Topic, TopicInfo, TopicInfoRequest, TopicInfoResponse, TopicRef,
};
