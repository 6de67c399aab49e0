use std::collections::HashSet;

use crate::error::{FamilyError, FamilyResult};
use crate::model::{Id, Person};
use crate::store::FamilyTree;

/// Renders the descendants of the member called `root_name`:
///
/// ```text
/// Family Tree of María:
/// María (Female) & Pedro
/// ├── Juanito (Male)
/// └── Anita (Female)
/// ```
///
/// A person reachable twice is expanded only the first time.
pub fn display_tree(tree: &FamilyTree, root_name: &str) -> FamilyResult<String> {
    let root_id = tree
        .registry
        .find_by_name(root_name)
        .ok_or_else(|| FamilyError::NotFound {
            entity_type: "Person".into(),
            id: root_name.to_string(),
        })?;

    let mut out = format!("Family Tree of {}:\n", root_name);
    let mut seen = HashSet::new();
    let root = tree.people.require(root_id)?;
    out.push_str(&label(tree, root));
    out.push('\n');
    seen.insert(root_id);
    render_children(tree, root, "", &mut seen, &mut out)?;
    Ok(out)
}

fn render_children(
    tree: &FamilyTree,
    person: &Person,
    prefix: &str,
    seen: &mut HashSet<Id<Person>>,
    out: &mut String,
) -> FamilyResult<()> {
    let children = person.children();
    for (i, child_id) in children.iter().enumerate() {
        let last = i + 1 == children.len();
        let child = tree.people.require(*child_id)?;
        let connector = if last { "└── " } else { "├── " };

        out.push_str(prefix);
        out.push_str(connector);
        out.push_str(&label(tree, child));

        if !seen.insert(*child_id) {
            out.push_str(" (see above)\n");
            continue;
        }
        out.push('\n');

        let next_prefix = format!("{}{}", prefix, if last { "    " } else { "│   " });
        render_children(tree, child, &next_prefix, seen, out)?;
    }
    Ok(())
}

fn label(tree: &FamilyTree, person: &Person) -> String {
    let mut s = format!("{} ({})", person.name, person.gender);
    if let Some(partner) = person.partner() {
        s.push_str(&format!(" & {}", tree.people.name_of(partner)));
    }
    if person.is_deceased() {
        s.push_str(" †");
    }
    s
}
