// Demo: generics — generic containers, trait-bounded statistics, generic
// display functions, and folded renderings.

use std::error::Error;

use typeview::demo::points::PointN;
use typeview::demo::stats::Stats;
use typeview::display::{
    nl, show_fold, show_label_def, show_note, show_op, show_rows, show_type, show_type_scalar,
};

fn main() -> Result<(), Box<dyn Error>> {
    show_label_def("demonstrate generic types");

    show_note("one definition, many instantiations");
    let pi: PointN<i32> = PointN::from(vec![1, 2, 3]);
    let pf: PointN<f64> = PointN::from(vec![1.5, -2.0, 3.25]);
    show_type(&pi, "pi");
    show_type(&pf, "pf");
    nl();

    show_note("folded self-display via the Describable capability");
    show_op("PointN::from((1..=12).collect()).width(5)");
    let big = PointN::from((1..=12).collect::<Vec<i32>>()).width(5);
    show_rows("big", &big);
    nl();

    show_note("folding works on any displayable sequence");
    show_op("show_fold(1..=7, 3, 2)");
    show_fold(1..=7, 3, 2);
    show_op("show_fold over &str items");
    show_fold(["alpha", "beta", "gamma", "delta", "epsilon"], 2, 4);
    nl();

    show_note("trait-bounded statistics");
    let si = Stats::new(vec![3, -1, 4, 1, 5, 9, 2, 6]);
    show_type_scalar(&si, "si");
    show_rows("si", &si);
    println!("size: {}", si.len());
    println!("max:  {}", si.max()?);
    println!("min:  {}", si.min()?);
    println!("sum:  {}", si.sum()?);
    println!("avg:  {:.3}", si.avg()?);
    nl();

    let sf = Stats::new(vec![1.5, 2.5, 3.0]);
    println!("sum:  {}", sf.sum()?);
    println!("avg:  {:.3}", sf.avg()?);
    nl();

    show_note("the empty sequence is an error, not a crash");
    let empty: Stats<i32> = Stats::new(vec![]);
    match empty.max() {
        Ok(_) => unreachable!("empty stats cannot produce a maximum"),
        Err(e) => println!("max over empty: {e}"),
    }

    println!("\nThat's all Folks!");
    Ok(())
}
