use crate::client::{ClientError, RecipeApi};
use async_trait::async_trait;
use models::RecipeId;
use std::cell::RefCell;

/// In-memory backend recording every DELETE it receives.
#[derive(Default)]
pub struct FakeApi {
    pub deleted: RefCell<Vec<RecipeId>>,
    unreachable: bool,
}

impl FakeApi {
    /// A backend whose every request fails in transport.
    pub fn unreachable() -> Self {
        Self {
            unreachable: true,
            ..Self::default()
        }
    }
}

#[async_trait(?Send)]
impl RecipeApi for FakeApi {
    async fn delete(&self, id: &RecipeId) -> Result<(), ClientError> {
        self.deleted.borrow_mut().push(id.clone());

        if self.unreachable {
            Err(gloo_net::Error::GlooError("connection refused".to_string()).into())
        } else {
            Ok(())
        }
    }
}
