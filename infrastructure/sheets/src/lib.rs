pub mod catalog;
pub mod client;
pub mod dto;
pub mod image_encoder;

#[cfg(test)]
pub(crate) mod test_server;
