use weather_core::{View, WeatherCard};

pub fn print_view(view: &View) {
    match view {
        View::Blank => {}
        View::Loading => eprintln!("Loading..."),
        View::Error { message } => eprintln!("{message}"),
        View::Weather(card) => print!("{}", format_card(card)),
    }
}

fn format_card(card: &WeatherCard) -> String {
    format!(
        "{icon}  {city}\n\
         {temperature}  {description}\n\
         Feels like: {feels_like}\n\
         Humidity:   {humidity}\n\
         Wind:       {wind}\n",
        icon = card.appearance.icon,
        city = card.city,
        temperature = card.temperature,
        description = card.description,
        feels_like = card.feels_like,
        humidity = card.humidity,
        wind = card.wind_speed,
    )
}
