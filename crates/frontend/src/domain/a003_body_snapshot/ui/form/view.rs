use super::view_model::{log_measurement_change, log_photo_selected, BodySnapshotFormViewModel};
use crate::domain::a001_measurement::ui::field::MeasurementField;
use crate::domain::a002_body_photo::ui::slot::ImageSlot;
use contracts::domain::a001_measurement::MeasurementValue;
use contracts::domain::a002_body_photo::ImageSelection;
use contracts::domain::a003_body_snapshot::BodySnapshotLayout;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn BodySnapshotForm(layout: BodySnapshotLayout) -> impl IntoView {
    let vm = BodySnapshotFormViewModel::new(&layout);

    let on_measurement_change =
        Callback::new(|value: MeasurementValue| log_measurement_change(&value));
    let on_photo_selected =
        Callback::new(|selection: ImageSelection| log_photo_selected(&selection));

    view! {
        <div class="body-snapshot">
            <div class="body-snapshot__photos">
                <Flex justify=FlexJustify::Center align=FlexAlign::FlexStart>
                    {vm.photos.into_iter().map(|selection| view! {
                        <ImageSlot selection=selection on_selected=on_photo_selected />
                    }).collect_view()}
                </Flex>
            </div>

            <div class="body-snapshot__measurements">
                <Flex vertical=true gap=FlexGap::Small align=FlexAlign::End>
                    {vm.measurements.into_iter().map(|value| view! {
                        <MeasurementField value=value on_change=on_measurement_change />
                    }).collect_view()}
                </Flex>
            </div>
        </div>
    }
}
