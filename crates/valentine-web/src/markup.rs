// Static markup for the five scenes and the decorative background.
// Pure string building; the stylesheet owns every visual detail.

use valentine_core::constants::{NO_INITIAL_HINT, PHOTO_PATH};
use valentine_core::Scene;

pub const ID_ROOT: &str = "valentine-app";
pub const ID_SCENES: &str = "scenes";
pub const ID_OPEN: &str = "open-btn";
pub const ID_CONTINUE: &str = "continue-btn";
pub const ID_YES: &str = "yes-btn";
pub const ID_NO: &str = "no-btn";
pub const ID_PHOTO: &str = "photo";
pub const ID_REVEAL: &str = "reveal-btn";

pub const CARD_SELECTOR: &str = ".card";
pub const EVASIVE_SELECTOR: &str = ".no-btn";
pub const SCENE_SELECTOR: &str = "section.scene";

pub fn background_html() -> String {
    let hearts: String = (1..=3)
        .map(|i| format!("<span class=\"h h{i}\">❤</span>"))
        .collect();
    format!(
        "<div class=\"bg\">\
           <div class=\"glow\"></div>\
           <div class=\"hearts-bg\">{hearts}</div>\
           <div class=\"sparkles\"><i></i><i></i><i></i></div>\
           <div class=\"ribbon\"></div>\
           <div class=\"bokeh\"></div>\
           <div class=\"vignette\"></div>\
           <div class=\"lantern\"></div>\
         </div>"
    )
}

fn scene_body(scene: Scene) -> String {
    match scene {
        Scene::Landing => format!(
            "<div class=\"landing\">\
               <h2 class=\"greeting\">Hey you...</h2>\
               <p class=\"sub\">I made something for you</p>\
               <button id=\"{ID_OPEN}\" class=\"open-btn\">Open it ❤️</button>\
               <div class=\"credit\">Presented by Pravallika for Pavan</div>\
             </div>"
        ),
        Scene::Letter => format!(
            "<div class=\"letter-wrapper\"><div class=\"card\">\
               <p class=\"typewriter\">\
                 <span>\"I don't know how you did it...\"</span><br>\
                 <span>\"But you became my peace,</span><br>\
                 <span>my happiness,</span><br>\
                 <span>and my home.\"</span><br>\
                 <strong class=\"big\">So today I wanted to ask you something...</strong>\
               </p>\
               <div class=\"card-actions\"><button id=\"{ID_CONTINUE}\">Continue →</button></div>\
             </div></div>"
        ),
        Scene::Question => format!(
            "<div class=\"question-scene\">\
               <h1 class=\"ask\">Will you be my Valentine?</h1>\
               <div class=\"choices\">\
                 <button id=\"{ID_YES}\" class=\"yes-btn\">YES 💖</button>\
                 <div class=\"no-wrapper\">\
                   <button id=\"{ID_NO}\" class=\"no-btn\" aria-label=\"No button\">{NO_INITIAL_HINT}</button>\
                 </div>\
               </div>\
               <p class=\"hint\">(Try to catch the <em>no</em> button—it's shy.)</p>\
             </div>"
        ),
        Scene::Memory => format!(
            "<div class=\"memory-scene\">\
               <div id=\"{ID_PHOTO}\" class=\"photo-polaroid\">\
                 <img src=\"{PHOTO_PATH}\" alt=\"us\">\
                 <div class=\"caption\">My favorite place is wherever you are ❤️</div>\
               </div>\
               <div class=\"memory-texts\">\
                 <p>Every moment with you...</p>\
                 <p class=\"fade-2\">became my favorite memory</p>\
                 <button id=\"{ID_REVEAL}\" class=\"reveal-btn\">Open the card 💌</button>\
               </div>\
             </div>"
        ),
        Scene::Celebration => "<div class=\"celebrate revealed\">\
               <h2>I knew it 😌❤️</h2>\
               <p class=\"large\">Happy Valentine's Day, my love</p>\
               <div class=\"big-photo card-final\"><div class=\"card-front final-card\">\
                 <h3>Thankyou for being my Valentine</h3>\
                 <p>With all my heart — forever and always.</p>\
                 <div class=\"small-heart\">❤️</div>\
               </div></div>\
               <p class=\"final\">Now you officially belong to me 😌</p>\
             </div>"
            .to_string(),
    }
}

/// Inner HTML for the app root: background plus every scene section.
pub fn app_html() -> String {
    let sections: String = Scene::ALL
        .iter()
        .map(|s| {
            format!(
                "<section class=\"scene\" data-scene=\"{}\">{}</section>",
                s.index(),
                scene_body(*s)
            )
        })
        .collect();
    format!(
        "{}<main id=\"{ID_SCENES}\" class=\"scenes\">{}</main>",
        background_html(),
        sections
    )
}
