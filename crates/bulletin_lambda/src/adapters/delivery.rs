use crate::runtime::contract::BulletinMessage;

pub trait MessagePublisher {
    fn publish(&self, queue_url: &str, message: &BulletinMessage) -> Result<String, String>;
}
