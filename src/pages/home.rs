use yew::prelude::*;

use crate::components::orbiting_tech::OrbitingTech;
use crate::config;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home-page">
            <section class="tech-section">
                <p class="section-kicker">{"Our stack"}</p>
                <h1>{format!("The technology behind {}", config::SITE_NAME)}</h1>
                <p class="section-sub">{config::SITE_TAGLINE}</p>
                <OrbitingTech />
            </section>

            <style>
                {r#"
                body {
                    margin: 0;
                    background: #0b1120;
                    font-family: 'Inter', -apple-system, BlinkMacSystemFont, sans-serif;
                }

                .home-page {
                    min-height: 100vh;
                    color: #ffffff;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .tech-section {
                    max-width: 800px;
                    padding: 4rem 2rem 6rem;
                    text-align: center;
                }

                .section-kicker {
                    margin: 0 0 0.5rem;
                    font-size: 0.8rem;
                    font-weight: 600;
                    letter-spacing: 0.12em;
                    text-transform: uppercase;
                    color: #7EB2FF;
                }

                .tech-section h1 {
                    margin: 0 0 1rem;
                    font-size: 2.5rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .section-sub {
                    margin: 0 auto 3.5rem;
                    max-width: 520px;
                    font-size: 1.05rem;
                    line-height: 1.6;
                    color: #999;
                }

                @media (max-width: 768px) {
                    .tech-section h1 {
                        font-size: 1.8rem;
                    }

                    .tech-section {
                        padding: 3rem 1rem 5rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
