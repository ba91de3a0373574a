use mockall::automock;

use crate::errors::compose::ComposeError;
use crate::models::compose::{ComposeTarget, Container};

#[automock]
pub trait ComposeClient {
    fn list_containers(&self, target: &ComposeTarget) -> Result<Vec<Container>, ComposeError>;
    fn up(&self, target: &ComposeTarget) -> Result<(), ComposeError>;
    fn down(&self, target: &ComposeTarget) -> Result<(), ComposeError>;
}
