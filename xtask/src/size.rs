use anyhow::{Context, Result};

#[derive(clap::Parser)]
#[group(skip)]
pub struct Options {
    /// Sizes to convert to bytes, e.g. `64k`, `1.44M`, `4G`.
    #[arg(required = true)]
    sizes: Vec<String>,
}

pub fn size(options: Options) -> Result<()> {
    for size in &options.sizes {
        let bytes = buildutil::parse_size(size).with_context(|| format!("failed parsing `{size}`"))?;
        println!("{bytes}");
    }

    Ok(())
}
