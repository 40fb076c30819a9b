use dioxus::prelude::*;

#[component]
pub fn About() -> Element {
    rsx! {
        section { class: "page page-about",
            h1 { "About this dashboard" }
            p {
                "This dashboard visualizes global energy consumption patterns from 1900 to 2020, "
                "covering over 200 countries and regions. Analyze how energy sources have evolved "
                "from fossil fuel dominance to emerging renewable adoption, explore correlations "
                "between economic growth and energy demand, and track environmental impact through "
                "greenhouse-gas emissions data. Eleven visualization types combine into a single "
                "view of the global energy transition."
            }

            ul { class: "page-about__facts",
                li {
                    strong { "Dataset: " }
                    a {
                        href: "https://www.kaggle.com/datasets/pralabhpoudel/world-energy-consumption",
                        target: "_blank",
                        "World Energy Consumption (1900–2020)"
                    }
                }
                li {
                    strong { "Coverage: " }
                    "200+ countries and regions"
                }
                li {
                    strong { "Sources: " }
                    "Coal, Oil, Gas, Nuclear, Hydro, Solar, Wind, Biofuel, Other Renewables"
                }
                li {
                    strong { "Key metrics: " }
                    "Primary energy (TWh), GDP (USD), GHG emissions (Mt CO2), population"
                }
            }

            p { class: "page-about__note",
                "The bundled demo extract covers a handful of countries; point the loader at the "
                "full Kaggle CSV for complete coverage."
            }
        }
    }
}
