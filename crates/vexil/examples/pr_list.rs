//! A `pr list`-style command wired up with every flag kind.
//!
//! Try:
//!
//! ```bash
//! cargo run --example pr_list -- --state Merged --label bug,docs --draft
//! cargo run --example pr_list -- --state bogus   # usage error with the domain
//! ```

use clap::Command;
use regex::Regex;
use vexil::{
    Domain, nil_bool_flag, nil_bool_value, nil_string_flag, nil_string_value, render_bool,
    render_string, render_values, string_enum_flag, string_enum_value, string_regexp_flag,
    string_regexp_value, string_slice_enum_flag, string_slice_enum_values,
};

fn main() {
    let build = Regex::new(r"^\d+$").expect("static pattern");

    let cmd = Command::new("pr-list")
        .about("List pull requests")
        .arg(nil_string_flag("author", Some('a'), "Filter by author"))
        .arg(nil_bool_flag("draft", Some('d'), "Filter by draft state"))
        .arg(string_enum_flag(
            "state",
            Some('s'),
            "open",
            Domain::new(["open", "closed", "merged"]),
            "Filter by state",
        ))
        .arg(string_slice_enum_flag(
            "label",
            Some('l'),
            &[],
            Domain::new(["bug", "docs", "feature"]),
            "Filter by labels",
        ))
        .arg(string_regexp_flag(
            "build",
            Some('b'),
            "",
            build,
            "Filter by build number",
        ));

    let matches = cmd.get_matches();

    let author = nil_string_value(&matches, "author");
    let draft = nil_bool_value(&matches, "draft");

    println!("state:  {}", render_string(string_enum_value(&matches, "state")));
    println!(
        "labels: {}",
        render_values(&string_slice_enum_values(&matches, "label"))
    );
    println!("build:  {}", render_string(string_regexp_value(&matches, "build")));
    println!(
        "author: {} (supplied: {})",
        render_string(author),
        author.is_some()
    );
    println!(
        "draft:  {} (supplied: {})",
        render_bool(draft),
        draft.is_some()
    );
}
