use crate::components::atoms::{Text, Title};
use crate::components::layout::{Col, Group, Row};
use crate::components::nav::Nav;
use yew::prelude::*;

#[function_component(LandingPage)]
pub(crate) fn landing_page() -> Html {
    html! {
        <>
            <Nav />
            <Row>
                <Col sm=12 md=12 lg=5 full_height=true padding="0 0 0 3rem">
                    <Group style="margin-top: 6rem;">
                        <Title>{"Welcome"}<br />{"to Portal."}</Title>
                        <Text>{"Share events, jobs and announcements with the Penn community."}</Text>
                    </Group>
                </Col>
                <Col sm=12 md=12 lg=7 overflow_y="hidden" overflow_x="hidden">
                    <img
                        class="portal-wireframes"
                        src="/static/wireframes.svg"
                        alt="Portal post previews"
                        style="max-width: 100%;"
                    />
                </Col>
            </Row>
        </>
    }
}
