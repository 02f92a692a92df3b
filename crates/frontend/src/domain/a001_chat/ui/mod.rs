pub mod chat_box;
