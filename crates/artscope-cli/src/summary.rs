use std::path::Path;

use console::Style;

use artscope_core::stats::color::ChannelStats;
use artscope_core::stats::FeatureSet;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_feature_summary(file: &Path, features: &FeatureSet) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Artscope Analysis"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(17)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(file.display())
    );
    println!();

    println!("  {}", s.header.apply_to("Color"));
    print_channel_row(&s, "Red", &features.color.red);
    print_channel_row(&s, "Green", &features.color.green);
    print_channel_row(&s, "Blue", &features.color.blue);
    println!();

    println!("  {}", s.header.apply_to("Texture"));
    print_value_row(&s, "Contrast", format!("{:.4}", features.texture.contrast));
    print_value_row(
        &s,
        "Homogeneity",
        format!("{:.4}", features.texture.homogeneity),
    );
    print_value_row(&s, "Energy", format!("{:.4}", features.texture.energy));
    println!();

    println!("  {}", s.header.apply_to("Composition"));
    print_value_row(
        &s,
        "Edge density",
        format!("{:.4}", features.composition.edge_density),
    );
    print_value_row(
        &s,
        "Symmetry",
        format!("{:.2}", features.composition.symmetry_score),
    );
    println!();
}

fn print_channel_row(s: &Styles, name: &str, stats: &ChannelStats) {
    print_value_row(
        s,
        name,
        format!(
            "mean {:>6.2}  std {:>6.2}  dominant {}",
            stats.mean, stats.std_dev, stats.dominant_bin
        ),
    );
}

fn print_value_row(s: &Styles, label: &str, value: String) {
    println!(
        "    {:<14}{}",
        s.label.apply_to(label),
        s.value.apply_to(value)
    );
}
