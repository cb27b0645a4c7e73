//! GEDCOM export serialization
//!
//! Re-emits a `FamilyTree` as GEDCOM 5.5.1-shaped text, used for export after
//! generation filtering. Records are written in source order, so parsing a file
//! and exporting it again preserves record and child ordering.

use crate::models::{Family, FamilyTree, Individual};

/// Serialize a tree as GEDCOM text
///
/// Emits a HEAD block with a UTF-8 charset declaration, one INDI block per
/// individual, one FAM block per family, and a TRLR terminator. Cross-references
/// reuse the scheme recorded on import; purely numeric (caller-generated) ids are
/// synthesized as `@I<id>@` / `@F<id>@`.
#[must_use]
pub fn write_gedcom(tree: &FamilyTree) -> String {
    let mut out = String::new();

    out.push_str("0 HEAD\n");
    out.push_str("1 GEDC\n");
    out.push_str("2 VERS 5.5.1\n");
    out.push_str("2 FORM LINEAGE-LINKED\n");
    out.push_str("1 CHAR UTF-8\n");

    for individual in tree.individuals.values() {
        write_individual(&mut out, individual);
    }
    for family in tree.families.values() {
        write_family(&mut out, family);
    }

    out.push_str("0 TRLR\n");
    out
}

fn write_individual(out: &mut String, individual: &Individual) {
    out.push_str(&format!("0 {} INDI\n", person_xref(&individual.id)));

    if individual.given_name.is_some() || individual.surname.is_some() {
        let given = individual.given_name.as_deref().unwrap_or("");
        let surname = individual.surname.as_deref().unwrap_or("");
        out.push_str(&format!("1 NAME {given} /{surname}/\n"));
    } else if let Some(name) = &individual.name {
        out.push_str(&format!("1 NAME {name}\n"));
    }

    if let Some(sex) = &individual.sex {
        out.push_str(&format!("1 SEX {sex}\n"));
    }

    write_event(out, "BIRT", &individual.birth_date, &individual.birth_place);
    write_event(out, "DEAT", &individual.death_date, &individual.death_place);

    if let Some(occupation) = &individual.occupation {
        out.push_str(&format!("1 OCCU {occupation}\n"));
    }
    if let Some(famc) = &individual.famc {
        out.push_str(&format!("1 FAMC {}\n", family_xref(famc)));
    }
    for fams in &individual.fams {
        out.push_str(&format!("1 FAMS {}\n", family_xref(fams)));
    }
}

/// Emit a BIRT/DEAT block with nested DATE and PLAC lines, when either is set
fn write_event(out: &mut String, tag: &str, date: &Option<String>, place: &Option<String>) {
    if date.is_none() && place.is_none() {
        return;
    }
    out.push_str(&format!("1 {tag}\n"));
    if let Some(date) = date {
        out.push_str(&format!("2 DATE {date}\n"));
    }
    if let Some(place) = place {
        out.push_str(&format!("2 PLAC {place}\n"));
    }
}

fn write_family(out: &mut String, family: &Family) {
    out.push_str(&format!("0 {} FAM\n", family_xref(&family.id)));
    if let Some(husband) = &family.husband {
        out.push_str(&format!("1 HUSB {}\n", person_xref(husband)));
    }
    if let Some(wife) = &family.wife {
        out.push_str(&format!("1 WIFE {}\n", person_xref(wife)));
    }
    for child in &family.children {
        out.push_str(&format!("1 CHIL {}\n", person_xref(child)));
    }
}

/// Wrap a stored individual id as a cross-reference
fn person_xref(id: &str) -> String {
    synthesize_xref(id, 'I')
}

/// Wrap a stored family id as a cross-reference
fn family_xref(id: &str) -> String {
    synthesize_xref(id, 'F')
}

fn synthesize_xref(id: &str, prefix: char) -> String {
    if id.chars().all(|c| c.is_ascii_digit()) {
        format!("@{prefix}{id}@")
    } else {
        format!("@{id}@")
    }
}
