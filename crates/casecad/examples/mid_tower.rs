//! Mid-tower case with a microATX board — basic casecad usage.

use casecad::{generate_case, CaseConfig, MotherboardConfig, PanelStyle};

fn main() {
    let mut config = CaseConfig::default();
    config.panels.front = PanelStyle::Mesh;
    config.panels.side = PanelStyle::Window;
    config.fans.rear = Some("fan120mm".to_string());
    config.motherboard = Some(MotherboardConfig::default());

    let case = generate_case(&config).unwrap();

    println!("{} anchors:", case.anchors().len());
    for (path, point) in case.anchors().iter() {
        println!("  {path}: [{:.2}, {:.2}, {:.2}]", point.x, point.y, point.z);
    }

    case.write_stl("mid_tower.stl").unwrap();
    println!("wrote mid_tower.stl");
}
