use crate::core::{
    context::StorefrontContext,
    error::{NexbuyError, Result},
    print_info, print_success,
    templates::{render_template, TemplateContext, TEMPLATES},
};

pub fn execute_login(context: &StorefrontContext, email: &str, password: &str) -> Result<()> {
    let mut sessions = context.open_session();
    let session = sessions.sign_in(email, password)?;
    print_success(&format!("Signed in as {}", session.email));
    Ok(())
}

pub fn execute_logout(context: &StorefrontContext) -> Result<()> {
    let mut sessions = context.open_session();
    match sessions.sign_out()? {
        Some(previous) => print_success(&format!("Signed out {}", previous.email)),
        None => print_info("Nobody was signed in"),
    }
    Ok(())
}

pub fn execute_whoami(context: &StorefrontContext) -> Result<()> {
    let sessions = context.open_session();
    let session = sessions.current().ok_or(NexbuyError::NotSignedIn)?;

    let greeting_context = TemplateContext {
        name: Some(session.display_name()),
        ..Default::default()
    };
    println!(
        "\n{}",
        render_template(TEMPLATES.greeting, &greeting_context)
    );
    println!(
        "Signed in as {} since {}\n",
        session.email,
        session.logged_at.format("%Y-%m-%d %H:%M UTC")
    );
    Ok(())
}
