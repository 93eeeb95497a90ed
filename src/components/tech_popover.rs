use yew::prelude::*;

use crate::orbit::catalog::Technology;
use crate::orbit::positioner::Placement;

fn link_hostname(link: &str) -> &str {
    let rest = link
        .trim_start_matches("https://")
        .trim_start_matches("http://");
    let rest = rest.strip_prefix("www.").unwrap_or(rest);
    rest.split('/').next().unwrap_or(rest)
}

#[derive(Properties, PartialEq)]
pub struct TechPopoverProps {
    pub tech: Technology,
    pub placement: Placement,
}

#[function_component(TechPopover)]
pub fn tech_popover(props: &TechPopoverProps) -> Html {
    let tech = &props.tech;
    let side = props.placement.as_class();

    html! {
        <div class={classes!("tech-popover", format!("tech-popover-{}", side))}>
            <div class={classes!("popover-arrow", format!("arrow-{}", side))}></div>
            <div class="popover-card" style={format!("box-shadow: inset 0 0 0 1px {}4d, 0 24px 48px rgba(2, 8, 23, 0.45);", tech.color)}>
                <div class="popover-header" style={format!("background: linear-gradient(135deg, {}26 0%, transparent 100%);", tech.color)}>
                    <div class="popover-icon" style={format!("background-color: {}20;", tech.color)}>
                        { tech.icon.clone() }
                    </div>
                    <div>
                        <h4>{ &tech.name }</h4>
                        {
                            // No link, no learn-more affordance.
                            if let Some(link) = &tech.link {
                                html! {
                                    <a class="popover-link" href={link.clone()} target="_blank" rel="noopener noreferrer">
                                        { link_hostname(link) }{" ↗"}
                                    </a>
                                }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                </div>
                <p class="popover-description">{ &tech.description }</p>
                <div class="popover-reasons">
                    <p class="popover-reasons-title">{"Why we build with it"}</p>
                    <ul>
                        { for tech.reasons.iter().map(|reason| html! {
                            <li>
                                <span class="reason-check" style={format!("color: {};", tech.color)}>{"✓"}</span>
                                <span>{ reason }</span>
                            </li>
                        }) }
                    </ul>
                </div>
                <div class="popover-stats">
                    <div class="stat">
                        <p class="stat-value" style={format!("color: {};", tech.color)}>{ tech.stats.projects }{"+"}</p>
                        <p class="stat-label">{"Projects"}</p>
                    </div>
                    <div class="stat-divider"></div>
                    <div class="stat">
                        <p class="stat-value" style={format!("color: {};", tech.color)}>{ tech.stats.years }{"+"}</p>
                        <p class="stat-label">{"Years of experience"}</p>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .tech-popover {
                    position: relative;
                    width: 320px;
                }

                @keyframes popover-from-left {
                    from { transform: translateX(-14px); opacity: 0; }
                    to { transform: translateX(0); opacity: 1; }
                }

                @keyframes popover-from-right {
                    from { transform: translateX(14px); opacity: 0; }
                    to { transform: translateX(0); opacity: 1; }
                }

                @keyframes popover-from-top {
                    from { transform: translateY(-14px); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }

                @keyframes popover-from-bottom {
                    from { transform: translateY(14px); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }

                .tech-popover-right { animation: popover-from-left 0.25s ease-in-out; }
                .tech-popover-left { animation: popover-from-right 0.25s ease-in-out; }
                .tech-popover-bottom { animation: popover-from-top 0.25s ease-in-out; }
                .tech-popover-top { animation: popover-from-bottom 0.25s ease-in-out; }

                .popover-arrow {
                    position: absolute;
                    width: 12px;
                    height: 12px;
                    background: #101726;
                    border: 1px solid rgba(126, 178, 255, 0.25);
                    transform: rotate(45deg);
                    z-index: 2;
                }

                .arrow-right {
                    left: -7px;
                    top: 50%;
                    margin-top: -6px;
                    border-right: none;
                    border-top: none;
                }

                .arrow-left {
                    right: -7px;
                    top: 50%;
                    margin-top: -6px;
                    border-left: none;
                    border-bottom: none;
                }

                .arrow-bottom {
                    top: -7px;
                    left: 50%;
                    margin-left: -6px;
                    border-right: none;
                    border-bottom: none;
                }

                .arrow-top {
                    bottom: -7px;
                    left: 50%;
                    margin-left: -6px;
                    border-left: none;
                    border-top: none;
                }

                .popover-card {
                    position: relative;
                    border-radius: 16px;
                    overflow: hidden;
                    background: #101726;
                    border: 1px solid rgba(126, 178, 255, 0.25);
                }

                .popover-header {
                    display: flex;
                    align-items: center;
                    gap: 12px;
                    padding: 16px 16px 12px;
                }

                .popover-icon {
                    width: 48px;
                    height: 48px;
                    border-radius: 12px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .popover-icon .tech-glyph {
                    font-size: 1.2rem;
                    font-weight: 700;
                }

                .popover-header h4 {
                    margin: 0;
                    font-size: 1.1rem;
                    color: #fff;
                }

                .popover-link {
                    font-size: 0.75rem;
                    color: #999;
                    text-decoration: none;
                    transition: color 0.3s ease;
                }

                .popover-link:hover {
                    color: #7EB2FF;
                }

                .popover-description {
                    margin: 0;
                    padding: 0 16px 12px;
                    font-size: 0.85rem;
                    line-height: 1.6;
                    color: #bbb;
                }

                .popover-reasons {
                    padding: 0 16px 12px;
                }

                .popover-reasons-title {
                    margin: 0 0 8px;
                    font-size: 0.7rem;
                    font-weight: 600;
                    letter-spacing: 0.08em;
                    text-transform: uppercase;
                    color: #888;
                }

                .popover-reasons ul {
                    margin: 0;
                    padding: 0;
                    list-style: none;
                }

                .popover-reasons li {
                    display: flex;
                    gap: 8px;
                    padding: 3px 0;
                    font-size: 0.85rem;
                    color: #ddd;
                }

                .reason-check {
                    flex-shrink: 0;
                }

                .popover-stats {
                    display: flex;
                    gap: 16px;
                    margin: 0 16px 16px;
                    padding: 12px;
                    border-radius: 12px;
                    background: rgba(255, 255, 255, 0.04);
                }

                .stat p {
                    margin: 0;
                }

                .stat-value {
                    font-size: 1.1rem;
                    font-weight: 700;
                }

                .stat-label {
                    font-size: 0.7rem;
                    color: #999;
                }

                .stat-divider {
                    width: 1px;
                    background: rgba(255, 255, 255, 0.1);
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::link_hostname;

    #[test]
    fn hostname_strips_scheme_www_and_path() {
        assert_eq!(link_hostname("https://react.dev"), "react.dev");
        assert_eq!(link_hostname("https://www.prisma.io"), "prisma.io");
        assert_eq!(link_hostname("http://nodejs.org/en/docs"), "nodejs.org");
        assert_eq!(link_hostname("aws.amazon.com"), "aws.amazon.com");
    }
}
