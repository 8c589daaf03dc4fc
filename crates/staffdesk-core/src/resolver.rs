// ── Association resolver ──
//
// Derived view for "add association" pickers: the catalog minus whatever the
// owner is already linked to. Pure and recomputed on demand from the current
// controller snapshots; nothing here is cached.

use std::collections::HashSet;
use std::hash::Hash;

use staffdesk_api::{
    Education, EducationId, Project, ProjectId, ProjectStaff, ProjectTechnology, RoleId, Skill,
    SkillId, Staff, StaffId, StaffSkill, Technology, TechnologyId, WorkExperience, WorkId,
};

/// An entity with a stable primary key.
pub trait Keyed {
    type Key: Copy + Eq + Hash;

    fn key(&self) -> Self::Key;
}

/// A join row that points at a catalog entity of type `C`.
pub trait LinksTo<C: Keyed> {
    fn target_key(&self) -> C::Key;
}

macro_rules! keyed {
    ($entity:ty, $field:ident, $key:ty) => {
        impl Keyed for $entity {
            type Key = $key;

            fn key(&self) -> $key {
                self.$field
            }
        }
    };
}

keyed!(Staff, staff_id, StaffId);
keyed!(Education, education_id, EducationId);
keyed!(WorkExperience, work_id, WorkId);
keyed!(Skill, skill_id, SkillId);
keyed!(Project, project_id, ProjectId);
keyed!(ProjectStaff, role_id, RoleId);
keyed!(Technology, technology_id, TechnologyId);

impl Keyed for StaffSkill {
    type Key = (StaffId, SkillId);

    fn key(&self) -> Self::Key {
        (self.staff_id, self.skill_id)
    }
}

impl Keyed for ProjectTechnology {
    type Key = (ProjectId, TechnologyId);

    fn key(&self) -> Self::Key {
        (self.project_id, self.technology_id)
    }
}

impl LinksTo<Skill> for StaffSkill {
    fn target_key(&self) -> SkillId {
        self.skill_id
    }
}

impl LinksTo<Technology> for ProjectTechnology {
    fn target_key(&self) -> TechnologyId {
        self.technology_id
    }
}

impl LinksTo<Project> for ProjectStaff {
    fn target_key(&self) -> ProjectId {
        self.project_id
    }
}

/// Catalog entries whose key does not appear among `associated`.
///
/// Catalog order is preserved.
pub fn available<C, A>(catalog: &[C], associated: &[A]) -> Vec<C>
where
    C: Keyed + Clone,
    A: LinksTo<C>,
{
    let linked: HashSet<C::Key> = associated
        .iter()
        .map(<A as LinksTo<C>>::target_key)
        .collect();
    catalog
        .iter()
        .filter(|entry| !linked.contains(&entry.key()))
        .cloned()
        .collect()
}

/// Whether `entry` is already linked.
pub fn is_linked<C, A>(entry: &C, associated: &[A]) -> bool
where
    C: Keyed,
    A: LinksTo<C>,
{
    let key = entry.key();
    associated.iter().any(|a| a.target_key() == key)
}
