//! Render one select and one update template.
//!
//! Run with:
//!   cargo run -p sqltemplate --example basic

use sqltemplate::{TemplateBuilder, TemplateResult};

fn main() -> TemplateResult<()> {
    let select = TemplateBuilder::new()
        .select("*")
        .table("T1")
        .eq("C1", 1)
        .gt_eq("C2", None::<i32>)
        .order_by("C1 DESC")
        .fetch_first_x(None);

    println!("{}", select.build_template()?);
    for (key, value) in select.build_params() {
        println!("  {key} = {value}");
    }

    let update = TemplateBuilder::new()
        .update(true)
        .table("T1")
        .set("C1", 2)
        .set("C2", "abc")
        .set("C3", None::<&str>)
        .eq("C1", 1)
        .gt_eq("C2", None::<&str>);

    println!("{}", update.build_template()?);
    for (key, value) in update.build_params() {
        println!("  {key} = {value}");
    }

    Ok(())
}
