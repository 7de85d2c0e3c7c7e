use eframe::{egui, epi};
use helpers::general::max_f64;
use std::fmt::Write;
use vehiclesim::core::display::SpeedUnit;
use vehiclesim::core::handle_comparison::handle_comparison;
use vehiclesim::core::selection::{Selection, MAX_NO_SELECTED};
use vehiclesim::core::vehicle::Catalog;
use vehiclesim::post::comparison_result::ComparisonResult;

/// Quantity drawn in the chart area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlotChannel {
    Speed,
    Downforce,
    DownforcePercent,
}

#[derive(Debug)]
pub struct ComparisonPlot {
    catalog: Catalog,
    selection: Selection,
    timestep_size: f64,
    unit: SpeedUnit,
    channel: PlotChannel,
    comp_result: ComparisonResult,
}

impl ComparisonPlot {
    pub fn new(
        catalog: Catalog,
        selection: Selection,
        timestep_size: f64,
        unit: SpeedUnit,
    ) -> anyhow::Result<ComparisonPlot> {
        // compute the initial comparison such that the first frame already shows the selection
        let comp_result = handle_comparison(&catalog, &selection, timestep_size, unit, false)?;

        Ok(ComparisonPlot {
            catalog,
            selection,
            timestep_size,
            unit,
            channel: PlotChannel::Speed,
            comp_result,
        })
    }

    /// The method recomputes the comparison after a selection or unit change. A failure is
    /// reported instead of crashing the UI since the previous result stays usable.
    fn recompute(&mut self) {
        match handle_comparison(
            &self.catalog,
            &self.selection,
            self.timestep_size,
            self.unit,
            false,
        ) {
            Ok(comp_result) => self.comp_result = comp_result,
            Err(e) => println!("WARNING: Could not recompute the comparison ({:#})!", e),
        }
    }

    /// The method fills the side panel with the vehicle checkboxes, the unit and channel
    /// switches, and the details of the compared vehicles.
    fn set_selection_panel_content(&mut self, ui: &mut egui::Ui) {
        ui.heading("Vehicles");
        ui.label(format!("Select up to {} vehicles", MAX_NO_SELECTED));
        ui.separator();

        let names: Vec<String> = self
            .catalog
            .vehicles
            .iter()
            .map(|pars| pars.name.to_owned())
            .collect();
        let mut recompute_required = false;

        for name in names.iter() {
            let mut checked = self.selection.contains(name);

            if ui.checkbox(&mut checked, name).changed() {
                // the selection enforces its capacity itself, so a checkbox set beyond the
                // capacity simply snaps back in the next frame
                if checked {
                    self.selection.add(name);
                } else {
                    self.selection.remove(name);
                }

                recompute_required = true;
            }
        }

        ui.separator();
        ui.heading("Speed unit");

        let mut unit = self.unit;
        ui.radio_value(&mut unit, SpeedUnit::Mps, "m/s");
        ui.radio_value(&mut unit, SpeedUnit::Kmh, "km/h");

        if unit != self.unit {
            self.unit = unit;
            recompute_required = true;
        }

        ui.separator();
        ui.heading("Channel");
        ui.radio_value(&mut self.channel, PlotChannel::Speed, "Speed");
        ui.radio_value(&mut self.channel, PlotChannel::Downforce, "Downforce");
        ui.radio_value(
            &mut self.channel,
            PlotChannel::DownforcePercent,
            "Downforce (% of weight)",
        );

        // details of the compared vehicles (the suspension parameters are descriptive attributes
        // and not part of the motion model)
        ui.separator();
        ui.heading("Details");

        for summary in self.comp_result.summaries.iter() {
            ui.label(format!(
                "{}: m {:.0} kg, v_inf {:.1} {}, tau {:.1} s, kz {:.0} N/m, cz {:.0} N·s/m",
                summary.name,
                summary.m,
                summary.v_inf * self.comp_result.unit.factor(),
                self.comp_result.unit.label(),
                summary.tau,
                summary.kz,
                summary.cz
            ));
        }

        if recompute_required {
            self.recompute();
        }
    }

    /// The method returns the upper y axis bound for the active channel. For the speed channel
    /// the global maximum terminal speed is used (the dedicated axis-scaling value of the
    /// comparison), for the other channels the maximum over all samples.
    fn get_y_axis_max(&self) -> f64 {
        let y_max = match self.channel {
            PlotChannel::Speed => self.comp_result.v_max_display(),
            _ => {
                let y_values: Vec<f64> = self
                    .comp_result
                    .series_all
                    .iter()
                    .flat_map(|series| {
                        series.samples.iter().map(|sample| match self.channel {
                            PlotChannel::Downforce => sample.d,
                            _ => sample.p,
                        })
                    })
                    .collect();

                max_f64(&y_values)
            }
        };

        // keep the transformation well-defined for empty comparisons
        if y_max > 0.0 {
            y_max
        } else {
            1.0
        }
    }

    fn get_y_axis_label(&self) -> String {
        match self.channel {
            PlotChannel::Speed => format!("v ({})", self.comp_result.unit.label()),
            PlotChannel::Downforce => String::from("D (N)"),
            PlotChannel::DownforcePercent => String::from("p (% of weight)"),
        }
    }

    pub fn set_ui_content(&mut self, ui: &mut egui::Ui) -> egui::Response {
        // PREPARATIONS ----------------------------------------------------------------------------
        // get UI handles
        let (response, painter) =
            ui.allocate_painter(ui.available_size_before_wrap_finite(), egui::Sense::drag());

        // get transformation from t/y to pixels in the window (y axis must be inverted)
        let x_max = if self.comp_result.shared_horizon > 0.0 {
            self.comp_result.shared_horizon
        } else {
            1.0
        };
        let y_max = self.get_y_axis_max();

        let to_screen = egui::emath::RectTransform::from_to(
            egui::emath::Rect::from_min_max(
                egui::Pos2 {
                    x: 0.0,
                    y: y_max as f32,
                },
                egui::Pos2 {
                    x: x_max as f32,
                    y: 0.0,
                },
            ),
            response.rect,
        );

        // create vector for drawn shapes
        let mut shapes = vec![];

        // GRID DRAWING ----------------------------------------------------------------------------
        // add horizontal gridlines at the axis quarters (incl. value labels)
        for i in 0..=4 {
            let y = y_max * i as f64 / 4.0;
            let tmp_p1 = to_screen
                * egui::Pos2 {
                    x: 0.0,
                    y: y as f32,
                };
            let tmp_p2 = to_screen
                * egui::Pos2 {
                    x: x_max as f32,
                    y: y as f32,
                };

            shapes.push(egui::Shape::line(
                vec![tmp_p1, tmp_p2],
                egui::Stroke::new(1.0, egui::Color32::from_gray(60)),
            ));
            shapes.push(egui::Shape::text(
                ui.fonts(),
                tmp_p1,
                egui::Align2::LEFT_BOTTOM,
                format!("{:.1}", y),
                egui::TextStyle::Small,
                egui::Color32::GRAY,
            ));
        }

        // add vertical gridlines at the time axis quarters
        for i in 1..=4 {
            let t = x_max * i as f64 / 4.0;
            let tmp_p1 = to_screen
                * egui::Pos2 {
                    x: t as f32,
                    y: 0.0,
                };
            let tmp_p2 = to_screen
                * egui::Pos2 {
                    x: t as f32,
                    y: y_max as f32,
                };

            shapes.push(egui::Shape::line(
                vec![tmp_p1, tmp_p2],
                egui::Stroke::new(1.0, egui::Color32::from_gray(60)),
            ));
            shapes.push(egui::Shape::text(
                ui.fonts(),
                tmp_p1,
                egui::Align2::RIGHT_BOTTOM,
                format!("{:.0}s", t),
                egui::TextStyle::Small,
                egui::Color32::GRAY,
            ));
        }

        // SERIES DRAWING --------------------------------------------------------------------------
        for series in self.comp_result.series_all.iter() {
            let tmp_color = egui::Color32::from_rgb(series.color.r, series.color.g, series.color.b);

            let tmp_points: Vec<egui::Pos2> = series
                .samples
                .iter()
                .map(|sample| {
                    let y = match self.channel {
                        PlotChannel::Speed => sample.v_disp,
                        PlotChannel::Downforce => sample.d,
                        PlotChannel::DownforcePercent => sample.p,
                    };

                    to_screen
                        * egui::Pos2 {
                            x: sample.t as f32,
                            y: y as f32,
                        }
                })
                .collect();

            // vehicle label at the series end
            if let Some(&tmp_text_pos) = tmp_points.last() {
                shapes.push(egui::Shape::text(
                    ui.fonts(),
                    tmp_text_pos,
                    egui::Align2::RIGHT_BOTTOM,
                    &series.name,
                    egui::TextStyle::Body,
                    tmp_color,
                ));
            }

            if tmp_points.len() >= 2 {
                shapes.push(egui::Shape::line(
                    tmp_points,
                    egui::Stroke::new(2.0, tmp_color),
                ));
            }
        }

        // UPDATE GENERAL INFORMATION TEXT IN GUI --------------------------------------------------
        let mut gen_info_text = format!("{}\n", self.get_y_axis_label());
        writeln!(
            &mut gen_info_text,
            "Shared horizon: {:.1}s",
            self.comp_result.shared_horizon
        )
        .unwrap();
        write!(
            &mut gen_info_text,
            "Global max. speed: {:.1} {}",
            self.comp_result.v_max_display(),
            self.comp_result.unit.label()
        )
        .unwrap();

        shapes.push(egui::Shape::text(
            ui.fonts(),
            to_screen
                * egui::Pos2 {
                    x: 0.0,
                    y: y_max as f32,
                },
            egui::Align2::LEFT_TOP,
            &gen_info_text,
            egui::TextStyle::Body,
            egui::Color32::WHITE,
        ));

        if self.comp_result.series_all.is_empty() {
            shapes.push(egui::Shape::text(
                ui.fonts(),
                response.rect.center(),
                egui::Align2::CENTER_CENTER,
                "No vehicles selected",
                egui::TextStyle::Heading,
                egui::Color32::WHITE,
            ));
        }

        // DRAWING ---------------------------------------------------------------------------------
        // update shapes in UI painter and return response
        painter.extend(shapes);
        response
    }
}

impl epi::App for ComparisonPlot {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::CtxRef, _frame: &mut epi::Frame) {
        // update side panel content (selection, unit, channel)
        egui::SidePanel::left("selection_panel", 260.0).show(ctx, |ui| {
            self.set_selection_panel_content(ui);
        });

        // update chart content
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::Frame::dark_canvas(ui.style()).show(ui, |ui| {
                self.set_ui_content(ui);
            });
        });
    }

    fn name(&self) -> &str {
        "Vehicle Comparison"
    }
}
