//! Bilingual copy, grouped by where it is shown

use crate::models::{Audience, Text};

pub mod nav {
    use super::Text;

    pub const HOME: Text = Text::new("Início", "Inicio");
    pub const PORTFOLIO: Text = Text::new("Portfólio", "Portafolio");
    pub const ABOUT: Text = Text::new("Sobre", "Nosotros");
    pub const CONTACT: Text = Text::new("Contato", "Contacto");
    pub const CATALOG: Text = Text::new("Catálogo", "Catálogo");
    pub const QUOTE: Text = Text::new("Orçamento", "Presupuesto");
    pub const SWITCH_TO_B2B: Text = Text::new("Para empresas", "Para empresas");
    pub const SWITCH_TO_B2C: Text = Text::new("Para sua casa", "Para tu hogar");
}

pub mod gate {
    use super::Text;

    pub const TITLE: Text = Text::new("Como podemos ajudar?", "¿Cómo podemos ayudarte?");
    pub const B2C: Text = Text::new("Quero mobiliar minha casa", "Quiero amueblar mi casa");
    pub const B2B: Text = Text::new("Represento uma empresa", "Represento a una empresa");
}

pub mod home {
    use super::Text;

    pub const FEATURED: Text = Text::new("Projetos em destaque", "Proyectos destacados");
    pub const SEE_ALL: Text = Text::new("Ver todos os projetos", "Ver todos los proyectos");
    pub const CTA: Text = Text::new("Fale conosco", "Hablemos");
}

pub mod portfolio {
    use super::Text;

    pub const TITLE: Text = Text::new("Portfólio", "Portafolio");
    pub const ALL: Text = Text::new("Todos", "Todos");
    pub const NEWEST: Text = Text::new("Mais recentes", "Más recientes");
    pub const OLDEST: Text = Text::new("Mais antigos", "Más antiguos");
    pub const EMPTY: Text = Text::new("Nenhum projeto nesta categoria", "Ningún proyecto en esta categoría");
}

pub mod about {
    use super::Text;

    pub const TITLE: Text = Text::new("Nossa história", "Nuestra historia");
    pub const BODY: Text = Text::new(
        "Há mais de vinte anos desenhamos e produzimos móveis em madeira maciça, do primeiro esboço à instalação.",
        "Desde hace más de veinte años diseñamos y fabricamos muebles de madera maciza, del primer boceto a la instalación.",
    );
    pub const CRAFT: Text = Text::new("Feito à mão", "Hecho a mano");
    pub const CRAFT_BODY: Text = Text::new(
        "Cada peça passa pelas mãos de marceneiros da nossa oficina.",
        "Cada pieza pasa por las manos de los carpinteros de nuestro taller.",
    );
    pub const SOURCING: Text = Text::new("Madeira certificada", "Madera certificada");
    pub const SOURCING_BODY: Text = Text::new(
        "Trabalhamos apenas com madeira de manejo sustentável ou de reaproveitamento.",
        "Trabajamos solo con madera de gestión sostenible o recuperada.",
    );
}

pub mod contact {
    use super::Text;

    pub const TITLE: Text = Text::new("Contato", "Contacto");
    pub const NAME: Text = Text::new("Nome", "Nombre");
    pub const MESSAGE: Text = Text::new("Mensagem", "Mensaje");
    pub const SEND: Text = Text::new("Enviar por e-mail", "Enviar por correo");
    pub const SUBJECT: Text = Text::new("Contato pelo site", "Contacto desde la web");
    pub const LOADING: Text = Text::new("Carregando...", "Cargando...");
}

pub mod b2b {
    use super::Text;

    pub const SOON: Text = Text::new("Em breve", "Próximamente");
    pub const SOON_BODY: Text = Text::new(
        "Esta área para empresas está em construção.",
        "Esta área para empresas está en construcción.",
    );
}

pub mod footer {
    use super::Text;

    pub const RIGHTS: Text = Text::new("Todos os direitos reservados", "Todos los derechos reservados");
    pub const CHANGE_STOREFRONT: Text = Text::new("Escolher outro perfil", "Elegir otro perfil");
}

pub fn hero_title(audience: Option<Audience>) -> Text {
    match audience {
        Some(Audience::B2b) => Text::new(
            "Mobiliário sob medida para o seu negócio",
            "Mobiliario a medida para tu negocio",
        ),
        _ => Text::new("Móveis que contam histórias", "Muebles que cuentan historias"),
    }
}

pub fn hero_subtitle(audience: Option<Audience>) -> Text {
    match audience {
        Some(Audience::B2b) => Text::new(
            "Escritórios, hotéis e lojas, do projeto à instalação em escala.",
            "Oficinas, hoteles y tiendas, del proyecto a la instalación a escala.",
        ),
        _ => Text::new(
            "Peças em madeira maciça feitas à mão para a sua casa.",
            "Piezas de madera maciza hechas a mano para tu hogar.",
        ),
    }
}
