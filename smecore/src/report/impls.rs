use crate::entity::Entity;
use crate::report::*;

impl Entity for Report {
    type Create = ReportCreate;
    type Update = ReportUpdate;

    const KIND: &'static str = "report";

    fn id(&self) -> i64 {
        self.id
    }
}
