use crate::entity::Entity;
use crate::teacher::*;

impl Entity for Teacher {
    type Create = TeacherCreate;
    type Update = TeacherUpdate;

    const KIND: &'static str = "teacher";

    fn id(&self) -> i64 {
        self.id
    }
}

impl Teacher {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
