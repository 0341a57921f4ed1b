//! Page copy and the render functions that emit it.
//!
//! Markdown here may be indented to sit with the code; the markdown layer
//! dedents before parsing. Links with a `#` destination point at the page
//! named by the link text.

use crate::sink::{Asset, DisplaySink};

/// (audience, what the app offers them)
const USER_GROUPS: [(&str, &str); 7] = [
    (
        "Recreational Users (Swimmers, Paddlers, Boaters)",
        r#"
        - **Purpose**: Understand if water quality conditions are safe for activities like swimming, kayaking, or boating.
        - **How to Use**: Check safety indicators and predictions to see if the water quality meets safe standards for recreational activities.
        - **Where to Go**: Go to the [Water Quality Trends](#) page and check the [current water quality dashboard](#water-quality-trends).
        "#,
    ),
    (
        "Local Residents",
        r#"
        - **Purpose**: Track water quality trends to understand potential health risks and environmental changes in their community.
        - **How to Use**: Check historical and real-time data for changes in water quality that could affect health.
        - **Where to Go**: Go to the [Pollution Insights](#) page for pollutant tracking and trend analysis.
        "#,
    ),
    (
        "Environmental Conservation Groups",
        r#"
        - **Purpose**: Use water quality data to advocate for cleaner rivers, detect pollution patterns, and identify opportunities for intervention.
        - **How to Use**: Check pollution sources and use the trends for awareness campaigns.
        - **Where to Go**: Visit the [Pollution Insights](#) and [Water Quality Trends](#) pages for detailed analysis.
        "#,
    ),
    (
        "Agricultural and Irrigation Planners",
        r#"
        - **Purpose**: Ensure that river water quality meets standards for safe agricultural use, which can impact crop safety and irrigation strategies.
        - **How to Use**: Check pollutant levels and seasonal data for better irrigation planning.
        - **Where to Go**: Visit the [Pollution Insights](#) page for detailed pollutant data.
        "#,
    ),
    (
        "Scientists and Researchers",
        r#"
        - **Purpose**: Analyze long-term water quality data to conduct studies on pollution, ecosystem health, and climate impacts.
        - **How to Use**: Use long-term data to conduct research and build predictive models.
        - **Where to Go**: Check out the [Water Quality Trends](#) page for historical data and the [Forecast & Predictions](#) page for predictions.
        "#,
    ),
    (
        "Public Health Officials",
        r#"
        - **Purpose**: Monitor water quality as part of public health assessments, particularly regarding exposure risks from pollutants or pathogens.
        - **How to Use**: Monitor alerts and trends to issue public health advisories.
        - **Where to Go**: Go to the [Safety Indicators](#) page for health-related alerts.
        "#,
    ),
    (
        "Policy Makers and Urban Planners",
        r#"
        - **Purpose**: Use data to support water management policies, regulations, and development plans, aiming to reduce pollution and improve water access.
        - **How to Use**: Use historical and predictive data to develop and enforce water management policies.
        - **Where to Go**: Visit the [Forecast & Predictions](#) page for long-term forecasts and regulatory insights.
        "#,
    ),
];

pub(super) fn homepage(sink: &mut dyn DisplaySink) {
    sink.title("Welcome to HydroTrek");
    sink.markdown(
        r#"
        An app that lets you stay updated on water quality, forecasting upcoming changes, and aiding efforts in maintaining river ecosystems.
        "#,
    );
    sink.image(Asset::Logo);

    sink.header("Overview of the App");
    sink.markdown(
        r#"
        HydroTrek lets you:
        - **Track real-time water quality trends**: Stay updated on current conditions to support safe recreational use and local awareness.
        - **Understand the impacts of sewage discharges and rainfall**: Analyze how these factors influence water quality over time.
        - **Explore predictive insights**: Use forecasts to anticipate future changes in water quality, guiding sustainable planning and policy decisions.
        "#,
    );

    sink.header("User Guide");
    sink.markdown(
        "This app serves multiple user groups. Find your profile below to discover insights tailored to your needs:",
    );
    for (idx, (group, description)) in USER_GROUPS.iter().enumerate() {
        sink.markdown(&format!("**{}. {}**", idx + 1, group));
        sink.markdown(description);
    }

    sink.header("Getting Started Guide");
    sink.markdown(
        r#"
        Follow the steps below to begin exploring the water quality data and insights in HydroTrek.
        1. *Select your user group* from the list above to understand how the app can serve your needs.
        2. *Navigate to the relevant pages* based on your interests:
           - [Water Quality Trends](#): Check current and historical water quality data.
           - [Pollution Insights](#): View trends and insights about pollution levels and their effects.
           - [Safety Indicators](#): Check real-time water quality safety for recreational activities.
           - [Forecast & Predictions](#): Get predictions for future water quality trends and events.
           - [Contact Us](#): Get to know the Collaborators and how to reach them.
        "#,
    );
    sink.markdown("Now, explore the app and make informed decisions about river water quality!");
}

pub(super) fn water_quality_trends(sink: &mut dyn DisplaySink) {
    sink.title("Water Quality Trends");
    sink.markdown(
        r#"
        ### Insights & Recommendations:
        - View historical and real-time data on water quality across various locations.
        - Visualize temporal patterns and seasonal shifts in water quality.
        - Analyze the impact of rainfall, pollution, and human activity on water quality.

        #### Recommendations:
        - Pay attention to high pollution areas.
        - Use this page to track improvements or deteriorations in water quality.
        - Compare current data to historical trends for long-term predictions.
        "#,
    );
}

pub(super) fn pollution_insights(sink: &mut dyn DisplaySink) {
    sink.title("Pollution Insights");
    sink.markdown(
        r#"
        ### Insights & Recommendations:
        - Understand the sources of pollution affecting the river's health.
        - Visualize pollutants by type and location, and their impact on the ecosystem.
        - Get predictions on pollutant levels and learn ways to mitigate risks.

        #### Recommendations:
        - For environmental managers, monitor trends to predict future risks.
        - For local authorities, use the data to develop strategies for pollution control.
        "#,
    );
}

pub(super) fn safety_indicators(sink: &mut dyn DisplaySink) {
    sink.title("Safety Indicators");
    sink.markdown(
        r#"
        ### Insights & Recommendations:
        - Track safety levels based on water quality data, including algae blooms and toxins.
        - Check alerts for swimmers, fishers, and others engaging in water-related activities.

        #### Recommendations:
        - Ensure safety by staying updated on water quality alerts in your area.
        - For swimmers, be aware of toxins that could affect your health.
        "#,
    );
}

pub(super) fn forecast_predictions(sink: &mut dyn DisplaySink) {
    sink.title("Forecast & Predictions");
    sink.markdown(
        r#"
        ### Insights & Recommendations:
        - Get forecasts of water quality and pollutant levels based on real-time data and historical trends.
        - Receive predictive insights into the future health of river ecosystems.

        #### Recommendations:
        - Use the forecast data to plan activities around the river and avoid areas with poor water quality.
        - Environmentalists can leverage predictions for long-term planning.
        "#,
    );
}

/// (name, e-mail)
const TEAM: [(&str, &str); 7] = [
    ("Keneilwe Rangwaga", "patricia001105@gmail.com"),
    ("Koketso Clement Bambo", "moraka1952@gmail.com"),
    ("Tikedzani Geraldine Vele", "geraldinevele@gmail.com"),
    ("Sihle Kalolo", "kalolohlesi@gmail.com"),
    ("Kamogelo Thalakgale", "kamogelothalakgale04@gmail.com"),
    ("Josephina Foloko", "missfolokodj@gmail.com"),
    ("Reitumetse Joyce Ramoeletsi", "joyceramoeletsi@gmail.com"),
];

pub(super) fn contact_us(sink: &mut dyn DisplaySink) {
    sink.title("Contact Us");
    sink.markdown(
        r#"
        ### Meet the team:

        - Contact details, images and profession
        "#,
    );

    let team: String = TEAM
        .iter()
        .enumerate()
        .map(|(idx, (name, email))| format!("{}. {} - [{}](mailto:{})\n", idx + 1, name, email, email))
        .collect();
    sink.markdown(&team);

    sink.markdown(
        r#"
        #### Recommendations:
        - Use the above information to get to know the collaborators.
        - Questions and recommendations are welcomed.
        "#,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::RecordingSink;

    #[test]
    fn test_contact_us_lists_whole_team() {
        let mut sink = RecordingSink::default();
        contact_us(&mut sink);
        let text = sink.text();
        for (name, email) in TEAM {
            assert!(text.contains(name));
            assert!(text.contains(&format!("(mailto:{})", email)));
        }
        assert!(text.contains("7. Reitumetse Joyce Ramoeletsi"));
    }

    #[test]
    fn test_copy_keeps_source_wording() {
        let mut sink = RecordingSink::default();
        homepage(&mut sink);
        assert!(sink
            .text()
            .contains("check the [current water quality dashboard](#water-quality-trends)."));

        let mut sink = RecordingSink::default();
        contact_us(&mut sink);
        assert!(sink.text().contains("- Contact details, images and profession"));
    }

    #[test]
    fn test_homepage_numbers_user_groups() {
        let mut sink = RecordingSink::default();
        homepage(&mut sink);
        let text = sink.text();
        for (idx, (group, _)) in USER_GROUPS.iter().enumerate() {
            assert!(text.contains(&format!("**{}. {}**", idx + 1, group)));
        }
    }
}
