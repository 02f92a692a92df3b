pub mod a001_chat;
pub mod a002_cloud_resource;
