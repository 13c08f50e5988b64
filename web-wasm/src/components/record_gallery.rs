//! 検出履歴ギャラリーコンポーネント

use leptos::prelude::*;
use people_counter_common::{format_timestamp, ApiConfig, DetectionRecord};

#[component]
pub fn RecordGallery(records: Signal<Vec<DetectionRecord>>, config: ApiConfig) -> impl IntoView {
    view! {
        <div class="record-gallery">
            <For
                each=move || records.get()
                key=|record| record.id
                children=move |record| {
                    let image_url = record
                        .has_image()
                        .then(|| config.asset_url(&record.image_path));
                    view! { <RecordCard record=record image_url=image_url /> }
                }
            />
        </div>
    }
}

#[component]
fn RecordCard(record: DetectionRecord, image_url: Option<String>) -> impl IntoView {
    let alt = format!("Detection {}", record.id);

    view! {
        <div class="record-card">
            {match image_url {
                Some(src) => view! { <img src=src alt=alt /> }.into_any(),
                None => view! {
                    <div class="no-image">
                        <span>"No Image"</span>
                    </div>
                }.into_any(),
            }}
            <div class="record-info">
                <h4>{format!("Detection #{}", record.id)}</h4>
                <p class="record-time">{format_timestamp(&record.timestamp)}</p>
                <p>"Number of People: "<strong>{record.num_people}</strong></p>
            </div>
        </div>
    }
}
