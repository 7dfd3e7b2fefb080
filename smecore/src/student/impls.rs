use crate::entity::Entity;
use crate::student::*;

impl Entity for Student {
    type Create = StudentCreate;
    type Update = StudentUpdate;

    const KIND: &'static str = "student";

    fn id(&self) -> i64 {
        self.id
    }
}

impl Student {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
