use serde::Serialize;

use crate::error::{FamilyError, FamilyResult};
use crate::model::{format_date, ExtendedFamily, Grandparents, ImmediateFamily};
use crate::queries::stats_queries::FamilyStats;
use crate::queries::*;
use crate::store::FamilyTree;

#[derive(Debug, Serialize)]
pub struct MemberLine {
    pub name: String,
    pub gender: String,
}

#[derive(Debug, Serialize)]
pub struct PersonReport {
    pub name: String,
    pub details: String,
    pub immediate: ImmediateFamily,
    pub extended: ExtendedFamily,
    pub grandparents: Grandparents,
    pub past_partners: Vec<String>,
    /// `child_details` line for each child.
    pub children: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct Birthday {
    pub name: String,
    pub birth_date: String,
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub members: Vec<MemberLine>,
    pub children_per_member: Vec<(String, usize)>,
    pub people: Vec<PersonReport>,
    pub birthday_month: u32,
    pub birthdays: Vec<Birthday>,
    pub stats: FamilyStats,
    pub tree: Option<String>,
}

pub fn build(
    tree: &FamilyTree,
    names: &[String],
    month: u32,
    tree_root: Option<&str>,
) -> FamilyResult<Report> {
    let members = registry_queries::list_members(tree)
        .into_iter()
        .map(|p| MemberLine {
            name: p.name.clone(),
            gender: p.gender.to_string(),
        })
        .collect();

    let mut children_per_member = Vec::new();
    for p in registry_queries::list_members(tree) {
        children_per_member.push((p.name.clone(), family_queries::number_of_children(tree, p.id)?));
    }

    let mut people = Vec::new();
    for name in names {
        let id = registry_queries::find_id(tree, name).ok_or_else(|| FamilyError::NotFound {
            entity_type: "Person".into(),
            id: name.clone(),
        })?;
        let children = tree
            .people
            .require(id)?
            .children()
            .iter()
            .map(|child| family_queries::child_details(tree, *child))
            .collect::<FamilyResult<Vec<_>>>()?;
        people.push(PersonReport {
            name: name.clone(),
            details: family_queries::full_details(tree, id)?,
            immediate: family_queries::immediate_family(tree, id)?,
            extended: family_queries::extended_family(tree, id)?,
            grandparents: family_queries::grandparents(tree, id)?,
            past_partners: family_queries::past_partners(tree, id)?,
            children,
        });
    }

    let birthdays = birthday_queries::birthdays_in_month(tree, month)?
        .into_iter()
        .filter_map(|p| {
            p.birth_date.map(|d| Birthday {
                name: p.name.clone(),
                birth_date: format_date(d),
            })
        })
        .collect();

    let rendered = match tree_root {
        Some(root) => Some(tree_queries::display_tree(tree, root)?),
        None => None,
    };

    Ok(Report {
        members,
        children_per_member,
        people,
        birthday_month: month,
        birthdays,
        stats: stats_queries::stats(tree),
        tree: rendered,
    })
}

fn list_or_none(names: &[String]) -> String {
    if names.is_empty() {
        "(none)".to_string()
    } else {
        names.join(", ")
    }
}

pub fn print_text(report: &Report) {
    println!("Family Tree Members ({}):", report.members.len());
    for m in &report.members {
        println!("  - {} ({})", m.name, m.gender);
    }

    println!();
    println!("Number of children for each member:");
    for (name, count) in &report.children_per_member {
        println!("  - {}: {}", name, count);
    }

    for p in &report.people {
        println!();
        println!("{}", p.name);
        println!("  {}", p.details);
        println!("  Parents: {}", list_or_none(&p.immediate.parents));
        println!("  Siblings: {}", list_or_none(&p.immediate.siblings));
        println!(
            "  Partner: {}",
            p.immediate.partner.as_deref().unwrap_or("(none)")
        );
        println!("  Past partners: {}", list_or_none(&p.past_partners));
        println!("  Children: {}", list_or_none(&p.immediate.children));
        for child in &p.children {
            println!("    {}", child);
        }
        println!("  Maternal grandparents: {}", list_or_none(&p.grandparents.maternal));
        println!("  Paternal grandparents: {}", list_or_none(&p.grandparents.paternal));
        if !p.grandparents.other.is_empty() {
            println!("  Other grandparents: {}", p.grandparents.other.join(", "));
        }
        println!("  Aunts: {}", list_or_none(&p.extended.aunts));
        println!("  Uncles: {}", list_or_none(&p.extended.uncles));
        println!("  Cousins: {}", list_or_none(&p.extended.cousins));
    }

    println!();
    if report.birthdays.is_empty() {
        println!("No birthdays found for month {}.", report.birthday_month);
    } else {
        println!("Birthdays in month {}:", report.birthday_month);
        for b in &report.birthdays {
            println!("  - {} ({})", b.name, b.birth_date);
        }
    }

    println!();
    let s = &report.stats;
    println!("Members: {} ({} living, {} deceased)", s.members, s.living, s.deceased);
    match s.average_age_at_death {
        Some(avg) => println!("Average age at death: {:.2} years", avg),
        None => println!("No deceased members to calculate average age at death."),
    }
    println!("Total number of children: {}", s.total_children);
    match s.average_children {
        Some(avg) => println!("Average number of children: {:.2}", avg),
        None => println!("Average number of children: n/a"),
    }

    if let Some(tree) = &report.tree {
        println!();
        print!("{}", tree);
    }
}

pub fn print_json(report: &Report) -> FamilyResult<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
