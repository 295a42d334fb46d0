use shadow_rs::{BuildPattern, ShadowBuilder};

fn main() -> shadow_rs::SdResult<()> {
    ShadowBuilder::builder()
        .build_pattern(BuildPattern::Lazy)
        .build()?;
    Ok(())
}
