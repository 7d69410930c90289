//! Role tables expanded into named convenience methods
//!
//! Each row names the role (and lineage for grandparents) once; the generated
//! methods only forward to the parameterised operation.

/// Named `add_father`/`remove_father`/... methods on `RelationshipLinker`
macro_rules! parent_role_methods {
    ($($name:literal => $role:path: $add:ident, $remove:ident, $add_save:ident, $remove_save:ident;)+) => {
        $(
            #[doc = concat!("Assign `parent` as the ", $name, " of `child` (not persisted).")]
            pub fn $add<'p>(
                &self,
                child: &mut Individual,
                parent: &'p Individual,
            ) -> Result<&'p Individual> {
                self.add_parent(child, parent, $role)
            }

            #[doc = concat!("Clear the ", $name, " of `child` (not persisted).")]
            pub fn $remove(&self, child: &mut Individual) -> Option<String> {
                self.remove_parent(child, $role)
            }

            #[doc = concat!("Assign and save the ", $name, " of `child`.")]
            pub fn $add_save<'p>(
                &mut self,
                child: &mut Individual,
                parent: &'p Individual,
            ) -> Result<&'p Individual> {
                self.add_parent_and_save(child, parent, $role)
            }

            #[doc = concat!("Clear and save the ", $name, " of `child`.")]
            pub fn $remove_save(&mut self, child: &mut Individual) -> Result<Option<String>> {
                self.remove_parent_and_save(child, $role)
            }
        )+
    };
}

/// Named `add_paternal_grandfather`/... methods on `RelationshipLinker`
macro_rules! grandparent_methods {
    ($($name:literal => ($lineage:path, $role:path): $add:ident, $add_save:ident;)+) => {
        $(
            #[doc = concat!("Assign `relative` as the ", $name, " of `child`; returns the updated parent.")]
            pub fn $add(&self, child: &Individual, relative: &Individual) -> Result<Individual> {
                self.add_grandparent(child, $lineage, $role, relative)
            }

            #[doc = concat!("Assign and save the ", $name, " of `child`.")]
            pub fn $add_save(&mut self, child: &Individual, relative: &Individual) -> Result<Individual> {
                self.add_grandparent_and_save(child, $lineage, $role, relative)
            }
        )+
    };
}

/// Named `father`/`paternal_grandmother`/... queries on `LineageTraversal`
macro_rules! lineage_queries {
    (
        parents { $($parent_name:literal => $parent_role:path: $parent_query:ident;)+ }
        grandparents { $($name:literal => ($lineage:path, $role:path): $query:ident;)+ }
    ) => {
        $(
            #[doc = concat!("The ", $parent_name, " of `x`, if known.")]
            pub fn $parent_query(&self, x: &Individual) -> Result<Option<Individual>> {
                self.parent(x, $parent_role)
            }
        )+
        $(
            #[doc = concat!("The ", $name, " of `x`; fails with `LineageGap` when the intermediate parent is unknown.")]
            pub fn $query(&self, x: &Individual) -> Result<Option<Individual>> {
                self.grandparent(x, $lineage, $role)
            }
        )+
    };
}
