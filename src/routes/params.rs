use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DeleteQuery {
    /// Answer to the "Are you sure?" prompt. Anything but `true` cancels.
    pub confirm: Option<bool>,
}

impl DeleteQuery {
    pub fn confirmed(&self) -> bool {
        self.confirm.unwrap_or(false)
    }
}
