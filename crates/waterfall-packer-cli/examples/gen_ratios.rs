use rand::{Rng, SeedableRng};
use std::fs;
use std::path::PathBuf;

fn ensure_dir(p: &PathBuf) -> anyhow::Result<()> {
    fs::create_dir_all(p)?;
    Ok(())
}

fn gen_demo_set(out: &PathBuf, rng: &mut impl Rng) -> anyhow::Result<()> {
    // ratios drawn from the reference demo's candidate set
    let candidates = [0.5_f32, 0.3, 1.5, 0.7];
    let feed: Vec<f32> = (0..20)
        .map(|_| candidates[rng.gen_range(0..candidates.len())])
        .collect();
    fs::write(out.join("demo.json"), serde_json::to_string_pretty(&feed)?)?;
    Ok(())
}

fn gen_uniform(out: &PathBuf, rng: &mut impl Rng) -> anyhow::Result<()> {
    let feed: Vec<f32> = (0..200).map(|_| rng.gen_range(0.2..=2.5)).collect();
    fs::write(
        out.join("uniform.json"),
        serde_json::to_string_pretty(&feed)?,
    )?;
    Ok(())
}

fn gen_extremes(out: &PathBuf, rng: &mut impl Rng) -> anyhow::Result<()> {
    // mostly flat cells with occasional very tall ones, to stress column
    // balance
    let feed: Vec<f32> = (0..150)
        .map(|_| {
            if rng.gen_bool(0.1) {
                rng.gen_range(4.0..=8.0)
            } else {
                rng.gen_range(0.1..=0.4)
            }
        })
        .collect();
    fs::write(
        out.join("extremes.json"),
        serde_json::to_string_pretty(&feed)?,
    )?;
    Ok(())
}

fn gen_plain_text(out: &PathBuf, rng: &mut impl Rng) -> anyhow::Result<()> {
    // line-per-ratio form with a comment header, as `pack` also accepts
    let mut text = String::from("# one aspect ratio per line\n");
    for _ in 0..50 {
        text.push_str(&format!("{:.2}\n", rng.gen_range(0.3..=1.8)));
    }
    fs::write(out.join("lines.txt"), text)?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    // Usage: cargo run -p waterfall-packer-cli --example gen_ratios -- [out_root]
    // Default out_root: feeds/generated
    let out_root = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("feeds/generated"));
    ensure_dir(&out_root)?;

    let mut rng = rand::rngs::StdRng::seed_from_u64(0xDEADBEEF);
    gen_demo_set(&out_root, &mut rng)?;
    gen_uniform(&out_root, &mut rng)?;
    gen_extremes(&out_root, &mut rng)?;
    gen_plain_text(&out_root, &mut rng)?;

    println!("Generated ratio feeds under {}", out_root.display());
    Ok(())
}
