//! Copy for the two landing variants. Same layout, different wording.

const ICON_CLOCK: &str = "M12 6v6h4.5m4.5 0a9 9 0 1 1-18 0 9 9 0 0 1 18 0Z";
const ICON_QUESTION: &str = "M9.879 7.519c1.171-1.025 3.071-1.025 4.242 0 1.172 1.025 1.172 2.687 0 3.712-.203.179-.43.326-.67.442-.745.361-1.45.999-1.45 1.827v.75M21 12a9 9 0 1 1-18 0 9 9 0 0 1 18 0Zm-9 5.25h.008v.008H12v-.008Z";
const ICON_BANKNOTE: &str = "M2.25 18.75a60.07 60.07 0 0 1 15.797 2.101c.727.198 1.453-.342 1.453-1.096V18.75M3.75 4.5v.75A.75.75 0 0 1 3 6h-.75m0 0v-.375c0-.621.504-1.125 1.125-1.125H20.25M2.25 6v9m18-10.5v.75c0 .414.336.75.75.75h.75m-1.5-1.5h.375c.621 0 1.125.504 1.125 1.125v9.75c0 .621-.504 1.125-1.125 1.125h-.375m1.5-1.5H21a.75.75 0 0 0-.75.75v.75m0 0H3.75m0 0h-.375a1.125 1.125 0 0 1-1.125-1.125V15m1.5 1.5v-.75A.75.75 0 0 0 3 15h-.75M15 10.5a3 3 0 1 1-6 0 3 3 0 0 1 6 0Zm3 0h.008v.008H18v-.008Zm-12 0h.008v.008H6v-.008Z";
const ICON_GLOBE: &str = "M12 21a9.004 9.004 0 0 0 8.716-6.747M12 21a9.004 9.004 0 0 1-8.716-6.747M12 21c2.485 0 4.5-4.03 4.5-9S14.485 3 12 3m0 18c-2.485 0-4.5-4.03-4.5-9S9.515 3 12 3m0 0a8.997 8.997 0 0 1 7.843 4.582M12 3a8.997 8.997 0 0 0-7.843 4.582m15.686 0A11.953 11.953 0 0 1 12 10.5c-2.998 0-5.74-1.1-7.843-2.918m15.686 0A8.959 8.959 0 0 1 21 12c0 .778-.099 1.533-.284 2.253m0 0A17.919 17.919 0 0 1 12 16.5c-3.162 0-6.133-.815-8.716-2.247m0 0A9.015 9.015 0 0 1 3 12c0-1.605.42-3.113 1.157-4.418";
const ICON_CALCULATOR: &str = "M15.75 15.75V18m-7.5-6.75h.008v.008H8.25v-.008Zm0 2.25h.008v.008H8.25v-.008Zm0 2.25h.008v.008H8.25v-.008Zm0 2.25h.008v.008H8.25v-.008Zm2.498-6.75h.007v.008h-.007v-.008Zm0 2.25h.007v.008h-.007v-.008Zm0 2.25h.007v.008h-.007v-.008Zm0 2.25h.007v.008h-.007v-.008Zm2.504-6.75h.008v.008h-.008v-.008Zm0 2.25h.008v.008h-.008v-.008Zm0 2.25h.008v.008h-.008v-.008Zm0 2.25h.008v.008h-.008v-.008Zm2.498-6.75h.008v.008h-.008v-.008Zm0 2.25h.008v.008h-.008v-.008ZM8.25 6h7.5v2.25h-7.5V6ZM12 2.25c-1.892 0-3.758.11-5.593.322C5.307 2.7 4.5 3.65 4.5 4.757V19.5a2.25 2.25 0 0 0 2.25 2.25h10.5a2.25 2.25 0 0 0 2.25-2.25V4.757c0-1.108-.806-2.057-1.907-2.185A48.507 48.507 0 0 0 12 2.25Z";
const ICON_SHIELD: &str = "M9 12.75 11.25 15 15 9.75m-3-7.036A11.959 11.959 0 0 1 3.598 6 11.99 11.99 0 0 0 3 9.749c0 5.592 3.824 10.29 9 11.623 5.176-1.332 9-6.03 9-11.622 0-1.31-.21-2.571-.598-3.751h-.152c-3.196 0-6.1-1.248-8.25-3.285Z";
const ICON_SMILE: &str = "M15.182 15.182a4.5 4.5 0 0 1-6.364 0M21 12a9 9 0 1 1-18 0 9 9 0 0 1 18 0ZM9.75 9.75c0 .414-.168.75-.375.75S9 10.164 9 9.75 9.168 9 9.375 9s.375.336.375.75Zm-.375 0h.008v.015h-.008V9.75Zm5.625 0c0 .414-.168.75-.375.75s-.375-.336-.375-.75.168-.75.375-.75.375.336.375.75Zm-.375 0h.008v.015h-.008V9.75Z";

pub const REASSURANCE: &str = "Gratuit. Pas de spam. Desinscription en un clic.";
pub const NAV_CTA: &str = "Rejoindre la beta";
pub const FOOTER_TAGLINE: &str = "Fait avec rigueur pour les investisseurs francais.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageVariant {
    Comparateur,
    Simulateurs,
}

impl PageVariant {
    pub fn path(self) -> &'static str {
        match self {
            PageVariant::Comparateur => "/",
            PageVariant::Simulateurs => "/simulateurs",
        }
    }

    pub fn copy(self) -> &'static PageCopy {
        match self {
            PageVariant::Comparateur => &COMPARATEUR,
            PageVariant::Simulateurs => &SIMULATEURS,
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Card {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct Advantage {
    pub icon: &'static str,
    pub text: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct Step {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
    pub og_description: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct PageCopy {
    pub meta: PageMeta,
    pub badge: &'static str,
    pub headline: &'static str,
    pub headline_accent: &'static str,
    pub subtitle: &'static str,
    pub problems_title: &'static str,
    pub problems_intro: &'static str,
    pub problems: [Card; 3],
    pub solution_title: &'static str,
    pub solution_accent: &'static str,
    pub solution_intro: &'static str,
    pub advantages: [Advantage; 4],
    pub steps_title: &'static str,
    pub steps_intro: &'static str,
    pub steps: [Step; 3],
    pub cta_title: &'static str,
    pub cta_intro: &'static str,
}

const META: PageMeta = PageMeta {
    title: "Simupatri — Simulateurs patrimoniaux immobiliers",
    description: "Comparez objectivement LMNP, SCPI, location nue et plus encore avec les vrais calculs fiscaux français. Inscrivez-vous à la beta.",
    og_description: "Comparez objectivement LMNP, SCPI, location nue et plus encore avec les vrais calculs fiscaux français.",
};

const STEPS: [Step; 3] = [
    Step {
        number: "1",
        title: "Decrivez votre profil fiscal",
        description: "TMI, quotient familial, revenus fonciers existants... On part de votre situation reelle.",
    },
    Step {
        number: "2",
        title: "Comparez vos options",
        description: "SCPI europeennes, SCPI francaises, immobilier cle en main delegue... Cote a cote, sans biais.",
    },
    Step {
        number: "3",
        title: "Obtenez le vrai rendement net",
        description: "Apres IR, prelevements sociaux, frais de gestion. Le chiffre qui compte vraiment pour decider.",
    },
];

pub static COMPARATEUR: PageCopy = PageCopy {
    meta: META,
    badge: "Beta a venir",
    headline: "Investir dans l'immobilier sans les galeres\u{a0}:",
    headline_accent: "SCPI ou cle en main\u{a0}?",
    subtitle: "Le premier comparateur qui calcule votre vrai rendement net, avec la fiscalite francaise complete.",
    problems_title: "Pourquoi c'est si dur de choisir",
    problems_intro: "Vous voulez faire travailler votre argent dans l'immobilier, sans que ca devienne un travail a plein temps.",
    problems: [
        Card {
            icon: ICON_CLOCK,
            title: "Vous voulez du rendement, pas un second metier",
            description: "Gestion locative, travaux, impayés, vacance... L'immobilier classique demande un temps et une énergie que vous n'avez pas forcement.",
        },
        Card {
            icon: ICON_QUESTION,
            title: "SCPI ou cle en main : impossible de comparer",
            description: "SCPI europeennes sans prelevements sociaux ou immobilier delegue type Ouiker ? Personne ne vous montre la comparaison nette d'impots.",
        },
        Card {
            icon: ICON_BANKNOTE,
            title: "Les chiffres qu'on vous donne sont faux",
            description: "Rendements bruts, fiscalite ignoree, prelevements sociaux oublies... Les estimations classiques surestiment votre gain reel de 30 a 40%.",
        },
    ],
    solution_title: "SCPI europeennes ou immobilier delegue\u{a0}:",
    solution_accent: "decouvrez ce qui rapporte vraiment",
    solution_intro: "Simupatri compare vos options d'investissement passif avec la vraie fiscalite. Pas d'estimation, pas de produit a vendre.",
    advantages: [
        Advantage {
            icon: ICON_GLOBE,
            text: "SCPI europeennes : 0% de prelevements sociaux (vs 17.2%)",
        },
        Advantage {
            icon: ICON_CALCULATOR,
            text: "Fiscalite reelle : TMI, quotient familial, PS au centime pres",
        },
        Advantage {
            icon: ICON_SHIELD,
            text: "100% neutre : on ne vend ni SCPI ni immobilier",
        },
        Advantage {
            icon: ICON_SMILE,
            text: "Concu pour ceux qui veulent investir sans gerer",
        },
    ],
    steps_title: "Comment ca marche",
    steps_intro: "Trois etapes. Pas de jargon. Des resultats clairs.",
    steps: STEPS,
    cta_title: "Pret a savoir ce qui rapporte vraiment\u{a0}?",
    cta_intro: "Inscrivez-vous pour acceder en avant-premiere au comparateur et faire vos propres simulations.",
};

pub static SIMULATEURS: PageCopy = PageCopy {
    meta: META,
    badge: "Simulateurs en beta privee",
    headline: "LMNP, SCPI, location nue\u{a0}:",
    headline_accent: "simulez avant d'investir",
    subtitle: "Des simulateurs patrimoniaux qui appliquent la vraie fiscalite francaise a votre situation, regime par regime.",
    problems_title: "Chaque regime a ses pieges",
    problems_intro: "Amortissements, micro-foncier, reel, prelevements sociaux... Les regles changent tout, et personne ne les applique a votre cas.",
    problems: [
        Card {
            icon: ICON_CLOCK,
            title: "Des heures de tableur pour une seule hypothese",
            description: "Chaque simulation maison demande de retrouver les baremes, les abattements et les plafonds. Et de tout refaire au moindre changement.",
        },
        Card {
            icon: ICON_QUESTION,
            title: "LMNP ou location nue : le flou total",
            description: "Micro-BIC, reel, deficit foncier... Les conseils se contredisent et rarement en tenant compte de votre TMI.",
        },
        Card {
            icon: ICON_BANKNOTE,
            title: "Des rendements affiches hors fiscalite",
            description: "Les simulateurs en ligne montrent un rendement brut. Votre rendement net d'impots peut etre inferieur de 30 a 40%.",
        },
    ],
    solution_title: "Un seul outil pour tous les regimes\u{a0}:",
    solution_accent: "comparez-les sur votre situation",
    solution_intro: "Simupatri applique les regles fiscales de chaque dispositif a votre profil et vous montre le resultat net, cote a cote.",
    advantages: [
        Advantage {
            icon: ICON_CALCULATOR,
            text: "LMNP, location nue, SCPI : memes hypotheses, memes calculs",
        },
        Advantage {
            icon: ICON_GLOBE,
            text: "SCPI europeennes integrees : 0% de prelevements sociaux",
        },
        Advantage {
            icon: ICON_SHIELD,
            text: "Aucun produit a vendre : des chiffres, pas un argumentaire",
        },
        Advantage {
            icon: ICON_SMILE,
            text: "Des resultats lisibles, sans jargon fiscal",
        },
    ],
    steps_title: "Trois etapes pour simuler",
    steps_intro: "Votre profil, vos options, votre rendement net.",
    steps: STEPS,
    cta_title: "Envie de simuler votre prochain investissement\u{a0}?",
    cta_intro: "Inscrivez-vous pour tester les simulateurs en avant-premiere.",
};
