use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use polygon_chart::api::PolygonChartConfig;
use polygon_chart::core::{Entry, Viewport};
use polygon_chart::platform_gtk::GtkPolygonChartView;
use polygon_chart::render::Color;

fn main() {
    let _ = polygon_chart::telemetry::init_default_tracing();
    let app = gtk::Application::builder()
        .application_id("rs.polygon_chart.demos.gtk_polygon_chart")
        .build();
    app.connect_activate(build_ui);
    app.run();
}

fn scores(round: usize) -> Vec<Entry> {
    let palette = [
        Color::from_argb_u32(0xFFD3_2F2F),
        Color::from_argb_u32(0xFF38_8E3C),
        Color::from_argb_u32(0xFF19_76D2),
        Color::from_argb_u32(0xFFF5_7C00),
        Color::from_argb_u32(0xFF7B_1FA2),
    ];
    let labels = ["Speed", "Power", "Range", "Armor", "Focus"];
    labels
        .iter()
        .zip(palette)
        .enumerate()
        .map(|(index, (label, color))| {
            let magnitude = 0.3 + 0.6 * (((index + round) * 37 % 100) as f64 / 100.0);
            Entry::new(*label, magnitude, color)
        })
        .collect()
}

fn build_ui(app: &gtk::Application) {
    let config = PolygonChartConfig::new(Viewport::new(640, 640))
        .with_fill_color(Color::rgba(0.1, 0.35, 0.9, 0.6))
        .with_background_color(Color::rgb(0.95, 0.95, 0.97));
    let view = match GtkPolygonChartView::new(config) {
        Ok(view) => Rc::new(view),
        Err(err) => {
            eprintln!("failed to initialize polygon chart: {err}");
            return;
        }
    };
    if let Err(err) = view.set_data(&scores(0)) {
        eprintln!("failed to assign data: {err}");
    }

    let shuffle = gtk::Button::with_label("New data");
    let round = std::cell::Cell::new(0_usize);
    shuffle.connect_clicked({
        let view = Rc::clone(&view);
        move |_| {
            round.set(round.get() + 1);
            if let Err(err) = view.set_data(&scores(round.get())) {
                eprintln!("failed to assign data: {err}");
            }
        }
    });

    let layout = gtk::Box::new(gtk::Orientation::Vertical, 8);
    view.widget().set_vexpand(true);
    layout.append(view.widget());
    layout.append(&shuffle);

    let window = gtk::ApplicationWindow::builder()
        .application(app)
        .title("polygon-chart")
        .default_width(640)
        .default_height(700)
        .child(&layout)
        .build();
    window.present();
}
