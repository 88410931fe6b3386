// Validation tables for the ₂F₁ identities.
// For each identity prints one row per sample z:
//   z    F(a, b, c, arg(z))    closed form    relative error    region
// Pass `--json` to print {"name":..., "z":[...], "f":[...], "ref":[...]} lines instead.

use hypergeo::elementary::{
    asin_ratio_exact, atan_ratio_exact, log1m_ratio_exact, sqrt_mean_exact,
};
use hypergeo::{hyp2f1_with, Hyp2f1Settings};

struct Identity {
    name: &'static str,
    a: f64,
    b: f64,
    c: f64,
    arg: fn(f64) -> f64,
    exact: fn(f64) -> f64,
    grid: Vec<f64>,
}

fn symmetric_grid() -> Vec<f64> {
    (0..20).map(|k| -0.95 + 0.1 * k as f64).collect()
}

fn wide_grid() -> Vec<f64> {
    let mut zs: Vec<f64> = (0..10).map(|k| 0.05 * k as f64).collect();
    zs.extend((0..=10).map(|k| 0.5 + 0.1 * k as f64));
    zs.extend((0..17).map(|k| 1.5 + 0.5 * k as f64));
    zs
}

fn fmt_arr(v: &[f64]) -> String {
    let inner: Vec<String> = v.iter().map(|x| format!("{x:.17}")).collect();
    format!("[{}]", inner.join(","))
}

fn main() {
    let json = std::env::args().any(|a| a == "--json");
    let settings = Hyp2f1Settings::default();

    let identities = [
        Identity {
            name: "-ln(1-z)/z",
            a: 1.0,
            b: 1.0,
            c: 2.0,
            arg: |z| z,
            exact: log1m_ratio_exact,
            grid: symmetric_grid(),
        },
        Identity {
            name: "asin(z)/z",
            a: 0.5,
            b: 0.5,
            c: 1.5,
            arg: |z| z * z,
            exact: asin_ratio_exact,
            grid: symmetric_grid(),
        },
        Identity {
            name: "atan(z)/z",
            a: 0.5,
            b: 1.0,
            c: 1.5,
            arg: |z| -z * z,
            exact: atan_ratio_exact,
            grid: wide_grid(),
        },
        Identity {
            name: "sqrt_mean(z)",
            a: -0.25,
            b: 0.25,
            c: 0.5,
            arg: |z| -z * z,
            exact: sqrt_mean_exact,
            grid: wide_grid(),
        },
    ];

    for id in &identities {
        let rows: Vec<(f64, f64, f64, String)> = id
            .grid
            .iter()
            .map(|&z| {
                let r = hyp2f1_with(id.a, id.b, id.c, (id.arg)(z), &settings);
                (z, r.value, (id.exact)(z), format!("{:?}", r.region))
            })
            .collect();

        if json {
            let zs: Vec<f64> = rows.iter().map(|r| r.0).collect();
            let fs: Vec<f64> = rows.iter().map(|r| r.1).collect();
            let refs: Vec<f64> = rows.iter().map(|r| r.2).collect();
            println!(
                "{{\"name\":\"{}\",\"z\":{},\"f\":{},\"ref\":{}}}",
                id.name,
                fmt_arr(&zs),
                fmt_arr(&fs),
                fmt_arr(&refs)
            );
            continue;
        }

        let head = format!("F({:.2}, {:.2}, {:.2}, z)", id.a, id.b, id.c);
        println!("{:>5}    {:>21}    {:>21}    {:>8}    region", "z", head, id.name, "eps");
        for (z, val, reference, region) in &rows {
            let eps = (reference - val).abs() / reference.abs();
            println!("{z:5.2}    {val:21.17}    {reference:21.17}    {eps:8.2e}    {region}");
        }
        println!();
    }
}
